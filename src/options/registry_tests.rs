//! Tests for the option registry and help catalogue.

use super::{ControlFlag, HelpCatalogue, OptionRegistry};
use crate::test_fixtures::registry;

mod lookup {
    use super::*;

    #[test]
    fn finds_field_by_either_spelling() {
        let registry = registry();

        assert_eq!(registry.lookup("--port"), Some("Port"));
        assert_eq!(registry.lookup("-p"), Some("Port"));
        assert_eq!(registry.lookup("port"), Some("Port"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = registry();

        assert_eq!(registry.lookup("--PORT"), None);
        assert_eq!(registry.lookup("-P"), None);
    }

    #[test]
    fn registration_accepts_bare_spellings() {
        let mut registry = OptionRegistry::new();
        registry.register("Folder", "folder", "f");

        assert_eq!(registry.lookup("--folder"), Some("Folder"));
        assert_eq!(registry.lookup("-f"), Some("Folder"));
    }

    #[test]
    fn last_registration_wins_on_collision() {
        let registry: OptionRegistry = [("Port", "--port", "-p"), ("Path", "--path", "-p")]
            .into_iter()
            .collect();

        assert_eq!(registry.lookup("-p"), Some("Path"));
        assert_eq!(registry.lookup("--port"), Some("Port"));
    }

    #[test]
    fn empty_short_spelling_is_not_registered() {
        let registry: OptionRegistry = [("Port", "--port", "")].into_iter().collect();

        assert_eq!(registry.lookup(""), None);
        assert_eq!(registry.lookup("-"), None);
    }

    #[test]
    fn entries_keep_registration_order() {
        let registry = registry();
        let fields: Vec<&str> = registry.entries().iter().map(|e| e.field.as_str()).collect();

        assert_eq!(fields, ["Folder", "Port", "Verbose", "Ratio", "Tag"]);
        assert_eq!(registry.len(), 5);
        assert!(!registry.is_empty());
    }
}

mod control_flags {
    use super::*;

    #[test]
    fn match_exact_spellings_only() {
        assert_eq!(ControlFlag::from_token("-h"), Some(ControlFlag::Help));
        assert_eq!(ControlFlag::from_token("--reset"), Some(ControlFlag::Reset));
        assert_eq!(ControlFlag::from_token("-i"), Some(ControlFlag::Ignore));
        assert_eq!(ControlFlag::from_token("--HELP"), None);
        assert_eq!(ControlFlag::from_token("help"), None);
        assert_eq!(ControlFlag::from_token("--reset=true"), None);
    }
}

mod help_catalogue {
    use super::*;

    #[test]
    fn lists_control_flags_and_fields() {
        let text = HelpCatalogue::new("AppSettings", &registry()).to_string();

        assert!(text.contains("[AppSettings]"));
        for flag in ["--help", "--reset", "--ignore", "-h", "-r", "-i"] {
            assert!(text.contains(flag), "missing {flag} in:\n{text}");
        }
        assert!(text.contains("-p, --port"));
        assert!(text.contains("Folder"));
    }

    #[test]
    fn omits_field_block_for_empty_registry() {
        let text = HelpCatalogue::new("Empty", &OptionRegistry::new()).to_string();

        assert!(text.contains("--help"));
        assert!(!text.contains("Fields"));
    }

    #[test]
    fn field_without_short_spelling_is_listed() {
        let registry: OptionRegistry = [("Port", "--port", "")].into_iter().collect();
        let catalogue = HelpCatalogue::new("S", &registry);

        assert_eq!(catalogue.fields().len(), 1);
        assert!(catalogue.to_string().contains("--port"));
    }
}
