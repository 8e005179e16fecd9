//! Numbered menu over stdin/stdout.

use std::io::{BufRead, Write};

use anirec_recommend::RecommendationEngine;
use anyhow::Result;

use crate::commands;

const HEAD_ROWS: usize = 5;

fn menu<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "What would you like to do?")?;
    writeln!(out, "1. Show the first {HEAD_ROWS} catalog entries")?;
    writeln!(out, "2. Get recommendations")?;
    writeln!(out, "3. Show how the model works")?;
    writeln!(out, "4. Pitch an anime")?;
    writeln!(out, "5. Quit")?;
    write!(out, "Your choice (1-5): ")?;
    out.flush()
}

/// Read one line; `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> std::io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run the menu until the user quits or input ends.
pub fn run<R: BufRead, W: Write>(
    engine: &mut RecommendationEngine,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    loop {
        menu(out)?;
        let Some(choice) = read_line(&mut input)? else {
            writeln!(out)?;
            return Ok(());
        };

        match choice.as_str() {
            "1" => commands::head(engine, HEAD_ROWS, out)?,
            "2" => {
                write!(
                    out,
                    "Enter favorite titles separated by commas (exactly as in the catalog): "
                )?;
                out.flush()?;
                let Some(line) = read_line(&mut input)? else {
                    writeln!(out)?;
                    return Ok(());
                };
                let favorites = commands::parse_favorites(&line);
                if favorites.is_empty() {
                    writeln!(out, "No favorites given. Please try again.")?;
                    continue;
                }
                let top_n = engine.config().recommend.default_top_n;
                match engine.recommend_explained(&favorites, top_n) {
                    Ok(set) if set.is_empty() => {
                        writeln!(out, "No recommendations available (check the titles you entered).")?;
                    }
                    Ok(set) => {
                        writeln!(out, "\nRecommendations:")?;
                        for rec in &set.recommendations {
                            writeln!(out, "- {}", rec.title)?;
                            if let Some(explanation) = &rec.explanation {
                                writeln!(out, "  {explanation}")?;
                            }
                        }
                    }
                    Err(e) => writeln!(out, "Error: {e}")?,
                }
            }
            "3" => {
                writeln!(out)?;
                commands::about(out)?;
            }
            "4" => {
                write!(out, "Enter a title (exactly as in the catalog): ")?;
                out.flush()?;
                let Some(title) = read_line(&mut input)? else {
                    writeln!(out)?;
                    return Ok(());
                };
                writeln!(out)?;
                commands::pitch(engine, &title, out)?;
            }
            "5" => {
                writeln!(out, "Goodbye!")?;
                return Ok(());
            }
            _ => writeln!(out, "Invalid choice. Please pick an option between 1 and 5.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anirec_core::config::AnirecConfig;
    use anirec_core::models::{Catalog, Item};

    fn engine() -> RecommendationEngine {
        RecommendationEngine::new(
            Catalog::new(vec![
                Item::new("A", "robots fight in space"),
                Item::new("B", "robots fight in space"),
                Item::new("C", "romance in school"),
            ]),
            AnirecConfig::default(),
        )
    }

    fn session(input: &str) -> String {
        let mut out = Vec::new();
        run(&mut engine(), input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn recommend_then_quit() {
        let text = session("2\nA\n5\n");
        assert!(text.contains("Recommendations:\n- B\n- C\n"));
        assert!(text.ends_with("Goodbye!\n"));
    }

    #[test]
    fn head_and_about() {
        let text = session("1\n3\n5\n");
        assert!(text.contains("[0] A"));
        assert!(text.contains("[2] C"));
        assert!(text.contains("TF-IDF"));
    }

    #[test]
    fn invalid_choice_and_empty_favorites() {
        let text = session("9\n2\n , \n2\nZ\n5\n");
        assert!(text.contains("Invalid choice"));
        assert!(text.contains("No favorites given"));
        assert!(text.contains("No recommendations available"));
    }

    #[test]
    fn pitch_known_and_unknown_titles() {
        let text = session("4\nC\n4\nZ\n5\n");
        assert!(text.contains("C: romance in school\n"));
        assert!(text.contains("Unknown title: Z\n"));
        assert!(text.ends_with("Goodbye!\n"));
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let text = session("1\n");
        assert!(!text.contains("Goodbye!"));
    }
}
