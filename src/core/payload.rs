use crate::core::{Database, SearchForm, SearchPayload};

pub const INTERACTOR_NAME_KEY: &str = "interactorName";
pub const DBS_TO_CHECK_KEY: &str = "dbsToCheck[]";

/// 依表單當下的狀態建立 payload
///
/// 文字欄位原樣帶入 (不 trim、不轉大小寫)；資料庫清單只包含已勾選的
/// checkbox，順序與表單上的順序相同。
pub fn build_payload(form: &SearchForm) -> SearchPayload {
    let dbs_to_check: Vec<Database> = form
        .checkboxes()
        .iter()
        .filter(|c| c.checked)
        .map(|c| c.id)
        .collect();

    SearchPayload {
        interactor_name: form.interactor_name.clone(),
        dbs_to_check,
    }
}

impl SearchPayload {
    /// 表單編碼用的鍵值對，陣列沿用 `dbsToCheck[]` 這種寫法
    ///
    /// 沒有勾選任何資料庫時不會出現 `dbsToCheck[]`。
    pub fn form_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(1 + self.dbs_to_check.len());
        pairs.push((INTERACTOR_NAME_KEY, self.interactor_name.as_str()));
        for db in &self.dbs_to_check {
            pairs.push((DBS_TO_CHECK_KEY, db.id()));
        }
        pairs
    }
}
