use crate::domain::model::Database;
use crate::utils::error::{Result, SearchError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeRole {
    /// 查詢命中的 interactor
    InteractorA,
    /// 與之交互作用的對象
    InteractorB,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub title: String,
    pub label: NodeRole,
    pub db: Database,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    /// 節點的其餘屬性 (依資料庫而不同)
    #[serde(flatten)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphLink {
    pub source: usize,
    pub target: usize,
}

/// `/interactor/search/results/graph` 回傳的節點與連結
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultsGraph {
    pub nodes: Vec<GraphNode>,
    pub links: Vec<GraphLink>,
}

impl ResultsGraph {
    pub fn validate(&self) -> Result<()> {
        for (i, link) in self.links.iter().enumerate() {
            for index in [link.source, link.target] {
                if index >= self.nodes.len() {
                    return Err(SearchError::Processing {
                        message: format!(
                            "link {} references node {} but graph has {} nodes",
                            i,
                            index,
                            self.nodes.len()
                        ),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn queried_interactors(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes
            .iter()
            .filter(|n| n.label == NodeRole::InteractorA)
    }

    /// 與指定節點相連的所有節點標題，連結方向不計
    pub fn partners_of(&self, index: usize) -> Vec<&str> {
        self.links
            .iter()
            .filter_map(|link| {
                if link.target == index {
                    Some(link.source)
                } else if link.source == index {
                    Some(link.target)
                } else {
                    None
                }
            })
            .filter_map(|i| self.nodes.get(i))
            .map(|n| n.title.as_str())
            .collect()
    }

    /// 各資料庫的節點數，依表單順序排列，沒有節點的資料庫略過
    pub fn count_by_database(&self) -> Vec<(Database, usize)> {
        Database::ALL
            .into_iter()
            .map(|db| (db, self.nodes.iter().filter(|n| n.db == db).count()))
            .filter(|(_, count)| *count > 0)
            .collect()
    }
}
