//! Property tests for the generated header structure.

use std::fs;

use proptest::prelude::*;
use tempfile::tempdir;

use icongen::IconGenerator;

fn icon_set() -> impl Strategy<Value = Vec<(String, Vec<u8>)>> {
    let name = proptest::string::string_regex("[A-Za-z][A-Za-z0-9_]{0,12}").unwrap();
    let content = proptest::collection::vec(any::<u8>(), 0..64);
    proptest::collection::vec((name, content), 1..8)
}

/// Lines between `<name>[] = {` and the closing `};`
fn array_entries<'a>(header: &'a str, symbol: &str) -> Vec<&'a str> {
    let open = format!("static const char *{}[] = {{\n", symbol);
    let start = header.find(&open).unwrap() + open.len();
    let end = start + header[start..].find("};\n").unwrap();
    header[start..end].lines().collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: both arrays and the count constant agree with the input length,
    /// names follow input order, and only the last entry lacks a comma.
    #[test]
    fn property_arrays_stay_in_step(icons in icon_set()) {
        let dir = tempdir().unwrap();
        let mut inputs = Vec::new();
        for (i, (name, content)) in icons.iter().enumerate() {
            // Index prefix keeps file names unique.
            let path = dir.path().join(format!("{}{}.svg", i, name));
            fs::write(&path, content).unwrap();
            inputs.push(path);
        }

        let generator = IconGenerator::default();
        let artifact = generator.collect(&inputs).unwrap();
        let header = generator.render(&artifact);

        prop_assert_eq!(artifact.count(), icons.len());

        let sources = array_entries(&header, "editor_nd_icon_sources");
        let names = array_entries(&header, "editor_nd_icon_names");
        prop_assert_eq!(sources.len(), icons.len());
        prop_assert_eq!(names.len(), icons.len());

        for (i, (name, _)) in icons.iter().enumerate() {
            let last = i + 1 == icons.len();
            let expected = format!("\t\"{}{}\"{}", i, name, if last { "" } else { "," });
            prop_assert_eq!(names[i], expected.as_str());
            prop_assert_eq!(sources[i].ends_with(','), !last);
        }

        let count_line = format!("static const int editor_nd_icon_count = {};\n", icons.len());
        prop_assert!(header.ends_with(&count_line));
    }

    /// PROPERTY: rendering the same inputs twice gives identical text.
    #[test]
    fn property_render_is_deterministic(icons in icon_set()) {
        let dir = tempdir().unwrap();
        let mut inputs = Vec::new();
        for (i, (name, content)) in icons.iter().enumerate() {
            let path = dir.path().join(format!("{}{}.svg", i, name));
            fs::write(&path, content).unwrap();
            inputs.push(path);
        }

        let generator = IconGenerator::default();
        prop_assert_eq!(
            generator.render_inputs(&inputs).unwrap(),
            generator.render_inputs(&inputs).unwrap()
        );
    }
}
