/// Nursery Rhymes demo — bigram vs. trigram generation over the same text.
///
/// Trains two generators on a handful of rhymes, prints a few passages from
/// each, and shows which fallback tier produced each word of one passage.
///
/// Run with: cargo run --example nursery_rhymes

use markov_text::core::generator::Tier;
use markov_text::core::pipeline::TextGenerator;
use markov_text::core::render::render;

const RHYMES: &str = "
Twinkle, twinkle, little star, how I wonder what you are!
Up above the world so high, like a diamond in the sky.
Hickory, dickory, dock. The mouse ran up the clock.
The clock struck one, the mouse ran down. Hickory, dickory, dock.
Jack and Jill went up the hill to fetch a pail of water.
Jack fell down and broke his crown, and Jill came tumbling after.
Humpty Dumpty sat on a wall. Humpty Dumpty had a great fall.
All the king's horses and all the king's men
couldn't put Humpty together again.
";

fn main() {
    for trigrams in [false, true] {
        let mut generator = TextGenerator::builder()
            .with_corpus_text(RHYMES)
            .output_length(20)
            .trigrams_enabled(trigrams)
            .seed(2026)
            .build()
            .expect("Failed to build generator");

        let stats = generator.model().stats();
        println!(
            "=== {} ({} tokens) ===",
            if trigrams { "with trigrams" } else { "bigrams only" },
            stats.corpus_tokens
        );
        for table in &stats.tables {
            println!("  order {}: {} contexts", table.order, table.contexts);
        }
        println!();

        for i in 1..=3 {
            println!("{}. {}", i, generator.generate());
        }
        println!();

        // --- Tier breakdown for one passage ---
        let traced = generator.generate_traced();
        println!("Tier trace:");
        for (token, tier) in traced.tokens.iter().zip(&traced.tiers) {
            let label = match tier {
                Tier::Seed => "seed",
                Tier::Trigram => "3",
                Tier::Bigram => "2",
                Tier::Unigram => "1",
                Tier::Random => "random",
            };
            println!("  {:>6}  {}", label, token);
        }
        println!("Rendered: {}", render(traced.tokens));
        println!();
    }
}
