use rand::Rng;
use tanka_types::{PhraseClass, Tanka};

use crate::error::ComposeError;
use crate::pool::PhraseBook;

/// Line classes of a tanka, 5-7-5-7-7
pub const LINE_CLASSES: [PhraseClass; 5] = [
    PhraseClass::Five,
    PhraseClass::Seven,
    PhraseClass::Five,
    PhraseClass::Seven,
    PhraseClass::Seven,
];

/// Draw every line independently, with replacement, from its class pool
pub fn compose_with<R: Rng + ?Sized>(
    book: &PhraseBook,
    rng: &mut R,
) -> Result<Tanka, ComposeError> {
    for class in PhraseClass::ALL {
        if book.pool(class).is_empty() {
            return Err(ComposeError::NoPhrases(class));
        }
    }

    let mut lines: [String; 5] = Default::default();
    for (line, class) in lines.iter_mut().zip(LINE_CLASSES) {
        let phrase = book
            .pool(class)
            .choose(rng)
            .ok_or(ComposeError::NoPhrases(class))?;
        *line = phrase.to_string();
    }

    Ok(Tanka { lines })
}

pub fn compose(book: &PhraseBook) -> Result<Tanka, ComposeError> {
    compose_with(book, &mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn book(five: &[&str], seven: &[&str]) -> PhraseBook {
        let mut book = PhraseBook::default();
        book.five.extend(five.iter().copied());
        book.seven.extend(seven.iter().copied());
        book
    }

    #[test]
    fn test_lines_come_from_matching_pools() {
        let five = ["haru", "natsu"];
        let seven = ["akikaze yo", "fuyugomori"];
        let book = book(&five, &seven);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let tanka = compose_with(&book, &mut rng).unwrap();
            for i in [0, 2] {
                assert!(five.contains(&tanka.lines[i].as_str()));
            }
            for i in [1, 3, 4] {
                assert!(seven.contains(&tanka.lines[i].as_str()));
            }
        }
    }

    #[test]
    fn test_every_phrase_gets_drawn() {
        let book = book(&["a", "b", "c"], &["x"]);
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            let tanka = compose_with(&book, &mut rng).unwrap();
            seen.insert(tanka.lines[0].clone());
            seen.insert(tanka.lines[2].clone());
        }

        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_empty_pool_is_an_error() {
        assert_eq!(
            compose(&book(&[], &["x"])),
            Err(ComposeError::NoPhrases(PhraseClass::Five))
        );
        assert_eq!(
            compose(&book(&["a"], &[])),
            Err(ComposeError::NoPhrases(PhraseClass::Seven))
        );
    }
}
