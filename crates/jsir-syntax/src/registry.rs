//! Registry for syntax readers.

use crate::traits::Reader;
use std::sync::{OnceLock, RwLock};

/// Global reader registry.
static READERS: RwLock<Vec<&'static dyn Reader>> = RwLock::new(Vec::new());
static READERS_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Register a custom reader.
///
/// Readers registered later do not shadow built-ins; lookups return the
/// first match.
pub fn register_reader(reader: &'static dyn Reader) {
    init_readers();
    READERS.write().unwrap().push(reader);
}

fn init_readers() {
    READERS_INITIALIZED.get_or_init(|| {
        let mut readers = READERS.write().unwrap();
        #[cfg(feature = "read-javascript")]
        {
            readers.push(&crate::input::javascript::JAVASCRIPT_READER);
        }
        readers.push(&crate::input::estree::ESTREE_READER);
    });
}

/// Get a reader by format name.
pub fn reader_for_language(lang: &str) -> Option<&'static dyn Reader> {
    init_readers();
    READERS
        .read()
        .unwrap()
        .iter()
        .find(|r| r.language() == lang)
        .copied()
}

/// Get a reader by file extension.
pub fn reader_for_extension(ext: &str) -> Option<&'static dyn Reader> {
    init_readers();
    READERS
        .read()
        .unwrap()
        .iter()
        .find(|r| r.extensions().contains(&ext))
        .copied()
}

/// Get all registered readers.
pub fn readers() -> Vec<&'static dyn Reader> {
    init_readers();
    READERS.read().unwrap().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "read-javascript")]
    fn test_javascript_lookup() {
        let reader = reader_for_language("javascript").expect("javascript reader");
        assert_eq!(reader.language(), "javascript");
        assert!(reader.extensions().contains(&"js"));

        let reader = reader_for_extension("mjs").expect("mjs extension");
        assert_eq!(reader.language(), "javascript");
    }

    #[test]
    fn test_estree_lookup() {
        let reader = reader_for_extension("json").expect("json extension");
        assert_eq!(reader.language(), "estree");
    }

    #[test]
    fn test_unknown_lookup() {
        assert!(reader_for_language("cobol").is_none());
        assert!(reader_for_extension("ts").is_none());
    }

    #[test]
    #[cfg(feature = "read-javascript")]
    fn test_read_via_registry() {
        let reader = reader_for_extension("js").unwrap();
        let program = reader.read("const x = 1 + 2;").unwrap();
        assert_eq!(program.body.len(), 1);
        assert_eq!(program.body[0].kind(), "VariableDeclaration");
    }

    #[test]
    fn test_readers_lists_builtins() {
        let names: Vec<_> = readers().iter().map(|r| r.language()).collect();
        assert!(names.contains(&"estree"));
    }
}
