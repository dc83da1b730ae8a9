use crate::utils::error::SearchError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 可供查詢的交互作用資料庫，順序即表單上 checkbox 的排列順序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Database {
    BioGRID,
    IntAct,
    #[serde(rename = "STRING")]
    StringDb,
}

impl Database {
    pub const ALL: [Database; 3] = [Database::BioGRID, Database::IntAct, Database::StringDb];

    /// checkbox 的 id，也是送往伺服器的識別字
    pub fn id(&self) -> &'static str {
        match self {
            Database::BioGRID => "BioGRID",
            Database::IntAct => "IntAct",
            Database::StringDb => "STRING",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Database {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Database::ALL
            .into_iter()
            .find(|db| db.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SearchError::UnknownDatabase {
                name: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkbox {
    pub id: Database,
    pub checked: bool,
}

/// 查詢表單：一個文字欄位加上固定的三個 checkbox
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub interactor_name: String,
    checkboxes: Vec<Checkbox>,
}

impl SearchForm {
    pub fn new(interactor_name: impl Into<String>) -> Self {
        Self {
            interactor_name: interactor_name.into(),
            checkboxes: Database::ALL
                .into_iter()
                .map(|id| Checkbox { id, checked: false })
                .collect(),
        }
    }

    pub fn with_checked(mut self, databases: &[Database]) -> Self {
        for db in databases {
            self.check(*db);
        }
        self
    }

    pub fn check(&mut self, db: Database) {
        self.set_checked(db, true);
    }

    pub fn uncheck(&mut self, db: Database) {
        self.set_checked(db, false);
    }

    pub fn set_checked(&mut self, db: Database, checked: bool) {
        if let Some(checkbox) = self.checkboxes.iter_mut().find(|c| c.id == db) {
            checkbox.checked = checked;
        }
    }

    pub fn is_checked(&self, db: Database) -> bool {
        self.checkboxes.iter().any(|c| c.id == db && c.checked)
    }

    pub fn checkboxes(&self) -> &[Checkbox] {
        &self.checkboxes
    }
}

/// 送往 `/interactor/search` 的請求內容
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPayload {
    pub interactor_name: String,
    pub dbs_to_check: Vec<Database>,
}

/// 表單送出事件
#[derive(Debug, Clone)]
pub struct SubmitEvent {
    pub form: SearchForm,
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new(form: SearchForm) -> Self {
        Self {
            form,
            default_prevented: false,
        }
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// 請求成功，已導向結果頁
    Navigated(String),
    /// 請求失敗，沒有導向
    Dropped,
}
