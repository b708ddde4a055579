/// Resolve a path relative to the crate root
#[macro_export]
macro_rules! relative_file {
    ($f : expr) => {{
        std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join($f)
    }};
}

/// Read a fixture and parse it with a given [crate::Parser]
#[macro_export]
macro_rules! parse_fixture {
    ($parser : expr, $path : expr) => {{
        let bytes = std::fs::read(&$path).unwrap();
        $parser.parse_bytes(&bytes)
    }};
}
