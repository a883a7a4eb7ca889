#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clip: bool,
    pub no_symbols: bool,
    pub save: bool,
    pub length: Option<isize>,
}
