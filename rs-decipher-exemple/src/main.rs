use rs_decipher_core::model::cache::load_or_build;
use rs_decipher_core::{CipherDecoder, ColumnGrid, LetterBigrams, TextReconstructor, WordUnigrams};

// Ciphertext to break (rotation cipher, unknown shift)
const CIPHERTEXT: &str = "Esp qtcde nzyqpcpynp zy esp ezatn zq Lcetqtntlw \
Tyepwwtrpynp hld spwo le Olcexzfes Nzwwprp ty estd jplc.";

// Text whose 2-character columns have been shuffled
const SHUFFLED: &str = r#"
|de|  | f|Cl|nf|ed|au| i|ti|  |ma|ha|or|nn|ou| S|on|nd|on|
|ry|  |is|th|is| b|eo|as|  |  |f |wh| o|ic| t|, |  |he|h |
|ab|  |la|pr|od|ge|ob| m|an|  |s |is|el|ti|ng|il|d |ua|c |
|he|  |ea|of|ho| m| t|et|ha|  | t|od|ds|e |ki| c|t |ng|br|
|wo|m,|to|yo|hi|ve|u | t|ob|  |pr|d |s |us| s|ul|le|ol|e |
| t|ca| t|wi| M|d |th|"A|ma|l |he| p|at|ap|it|he|ti|le|er|
|ry|d |un|Th|" |io|eo|n,|is|  |bl|f |pu|Co|ic| o|he|at|mm|
|hi|  |  |in|  |  | t|  |  |  |  |ye|  |ar|  |s |  |  |. |
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Word list (one word per line) used for letter bigrams.
    // The built model is cached next to it as 'sowpods.bin'
    let bigrams = load_or_build("./data/sowpods.txt", |path| LetterBigrams::from_file(path))?;

    // Try the 26 shifts and rank them
    let ranked = CipherDecoder::new(&bigrams).decode(CIPHERTEXT);
    println!("Most probable phrase (shift {}): {}", ranked[0].origin, ranked[0].text);
    println!("With probability: {:.4e}", ranked[0].probability());
    println!("Second best probability: {:.4e}", ranked[1].probability());

    // Word counts ("word<TAB>count" per line) used for word unigrams.
    // The built model is cached next to it as 'count_1w.bin'
    let unigrams = load_or_build("./data/count_1w.txt", |path| WordUnigrams::from_file(path))?;
    let reconstructor = TextReconstructor::new(&unigrams);

    // Reorder the columns of the puzzle
    let grid = ColumnGrid::from_text(SHUFFLED)?;
    let results = reconstructor.reconstruct(&grid)?;
    // Rejected start columns come last with a log-probability of -inf
    match results.first() {
        Some(best) if best.score.is_finite() => {
            println!("Most probable text (starting with column {}):\n{}", best.origin, best.text)
        }
        _ => println!("Every column starts with a space, nothing to reconstruct"),
    }

    // Shuffle a known text and check it comes back
    let mut grid = ColumnGrid::from_text("th|is| i|s |a |\nte|st| f|or|  |\nth|is| c|la|ss|\n")?;
    grid.shuffle_columns(&mut rand::rng());
    println!("Shuffled:\n{}", grid.to_delimited('|'));

    let results = reconstructor.reconstruct(&grid)?;
    for (i, candidate) in results.iter().take(3).enumerate() {
        println!("Candidate {} (log-probability {:.2}):\n{}", i + 1, candidate.score, candidate.text);
    }

    Ok(())
}
