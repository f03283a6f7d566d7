use std::path::PathBuf;

pub fn data_path(fname: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(fname)
}
