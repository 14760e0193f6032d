use serde::Deserialize;

/// ESearch JSON envelope. Every level defaults so a response without
/// `esearchresult.idlist` decodes to an empty id list.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ESearchResult {
    #[serde(default)]
    pub esearchresult: ESearchData,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ESearchData {
    #[serde(default, rename = "ERROR")]
    pub error: Option<String>,
    #[serde(default)]
    pub idlist: Vec<String>,
}
