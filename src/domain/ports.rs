use crate::utils::error::Result;

pub trait Storage {
    /// Reads the whole file. The handle must be released before returning.
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn monitor(&self) -> bool;
}
