//! Property-based tests for rust_chain_logger using proptest

use proptest::prelude::*;
use rust_chain_logger::prelude::*;

fn any_level() -> impl Strategy<Value = Level> {
    prop::sample::select(Level::ALL.to_vec())
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Test that Level string conversions roundtrip correctly
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let parsed: Level = level.as_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that Level ordering is the ordering of the numeric codes
    #[test]
    fn test_level_ordering(level1 in any_level(), level2 in any_level()) {
        prop_assert_eq!(level1 <= level2, level1.code() <= level2.code());
        prop_assert_eq!(level1 < level2, level1.code() < level2.code());
        prop_assert_eq!(level1.cmp(&level2), level1.code().cmp(&level2.code()));
    }

    /// Test that the code table resolves exactly the eight levels
    #[test]
    fn test_get_level_name_only_for_defined_codes(code in -1000i32..1000) {
        let defined = Level::ALL.iter().find(|level| level.code() == code);
        match (defined, get_level_name(code)) {
            (Some(level), Ok(name)) => prop_assert_eq!(name, level.as_str()),
            (None, Err(LoggerError::UnknownLevel(c))) => prop_assert_eq!(c, code),
            (defined, result) => prop_assert!(
                false,
                "code {} resolved inconsistently: {:?} vs {:?}",
                code,
                defined,
                result
            ),
        }
    }

    /// Test that parsing accepts case-insensitive input
    #[test]
    fn test_level_case_insensitive(level in any_level(), use_lower in any::<bool>()) {
        let input = if use_lower {
            level.as_str().to_lowercase()
        } else {
            level.as_str().to_string()
        };
        prop_assert_eq!(input.parse::<Level>().unwrap(), level);
    }
}

// ============================================================================
// Handler threshold Tests
// ============================================================================

proptest! {
    /// A handler accepts exactly the records at least as severe as its threshold
    #[test]
    fn test_threshold_gate(threshold in any_level(), record_level in any_level()) {
        let handler = ConsoleHandler::new(threshold);
        prop_assert_eq!(handler.is_handling(record_level), record_level >= threshold);

        let core = HandlerCore::new(threshold);
        prop_assert_eq!(core.is_handling(record_level), record_level >= threshold);
    }

    /// Records below the threshold are skipped without stopping dispatch
    #[test]
    fn test_below_threshold_never_stops(
        threshold in any_level(),
        record_level in any_level(),
        bubble in any::<bool>(),
    ) {
        let core = HandlerCore::new(threshold).with_bubble(bubble);
        let record = Record::new(record_level, "message", "prop");
        let handled = core.process(&record, |_| Ok(()));

        if record_level >= threshold {
            prop_assert_eq!(handled.stop, !bubble);
        } else {
            prop_assert!(!handled.stop);
        }
        prop_assert!(handled.error.is_none());
    }
}

// ============================================================================
// Formatter Tests
// ============================================================================

proptest! {
    /// The line formatter always produces exactly one line
    #[test]
    fn test_line_formatter_single_line(message in "(?s).{0,64}") {
        let record = Record::new(Level::Info, message, "prop");
        let line = LineFormatter::new().format(&record);
        prop_assert!(line.ends_with('\n'));
        prop_assert_eq!(line.matches('\n').count(), 1);
        prop_assert!(!line.contains('\r'));
    }

    /// The JSON formatter output always parses back to the same message
    #[test]
    fn test_json_formatter_preserves_message(message in ".*") {
        let record = Record::new(Level::Error, message.clone(), "prop");
        let line = JsonFormatter::new().format(&record);
        let parsed: serde_json::Value = serde_json::from_str(line.trim_end()).unwrap();
        prop_assert_eq!(parsed["message"].as_str(), Some(message.as_str()));
    }
}

// ============================================================================
// Logger chain Tests
// ============================================================================

proptest! {
    /// set_handlers leaves the chain in input order whatever was there before
    #[test]
    fn test_set_handlers_preserves_order(
        before in prop::collection::vec(any_level(), 0..4),
        levels in prop::collection::vec(any_level(), 0..8),
    ) {
        let logger = Logger::new("prop", Level::Debug);
        for level in before {
            logger.push_handler(ConsoleHandler::new(level));
        }

        let handlers: Vec<std::sync::Arc<dyn Handler>> = levels
            .iter()
            .map(|level| std::sync::Arc::new(ConsoleHandler::new(*level)) as std::sync::Arc<dyn Handler>)
            .collect();
        logger.set_handlers(handlers);

        let chain: Vec<Level> = logger.get_handlers().iter().map(|h| h.level()).collect();
        prop_assert_eq!(chain, levels);
    }
}
