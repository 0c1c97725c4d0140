//! Content model: pages made of display blocks
//!
//! A [`Page`] is an ordered list of [`ContentBlock`]s. Pages are parsed from
//! TOML documents at startup and never change afterwards. Blocks carry
//! display data only: no block refers to another.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Emphasis kind of a [`ContentBlock::Callout`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalloutKind {
    /// Neutral information box
    Info,
    /// Positive takeaway or best practice
    Success,
    /// Caution or unavailable content
    Warning,
    /// Highlighted key idea
    Highlight,
    /// Feature card with a title
    Card,
}

/// Marker shown next to a collapsible section title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    New,
    Hot,
}

/// One column of a [`ContentBlock::Columns`] group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub blocks: Vec<ContentBlock>,
}

/// One unit of static display content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Heading {
        text: String,
        #[serde(default = "default_heading_level")]
        level: u8,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
    },
    Paragraph {
        text: String,
    },
    List {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        items: Vec<String>,
        #[serde(default)]
        ordered: bool,
    },
    Table {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    /// Block-level mathematical expression in LaTeX notation
    Math {
        tex: String,
    },
    /// Section whose children can be shown or hidden
    Collapsible {
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
        /// Default expand state
        #[serde(default)]
        expanded: bool,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        badges: Vec<Badge>,
        blocks: Vec<ContentBlock>,
    },
    Callout {
        kind: CalloutKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        text: String,
    },
    /// Side-by-side groups of blocks
    Columns {
        columns: Vec<Column>,
    },
    Divider,
}

fn default_heading_level() -> u8 {
    2
}

impl ContentBlock {
    /// Short variant name, used in logs and validation messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            ContentBlock::Heading { .. } => "heading",
            ContentBlock::Paragraph { .. } => "paragraph",
            ContentBlock::List { .. } => "list",
            ContentBlock::Table { .. } => "table",
            ContentBlock::Math { .. } => "math",
            ContentBlock::Collapsible { .. } => "collapsible",
            ContentBlock::Callout { .. } => "callout",
            ContentBlock::Columns { .. } => "columns",
            ContentBlock::Divider => "divider",
        }
    }

    /// Direct children of this block, in display order
    pub fn children(&self) -> Box<dyn Iterator<Item = &ContentBlock> + '_> {
        match self {
            ContentBlock::Collapsible { blocks, .. } => Box::new(blocks.iter()),
            ContentBlock::Columns { columns } => {
                Box::new(columns.iter().flat_map(|column| column.blocks.iter()))
            }
            _ => Box::new(std::iter::empty()),
        }
    }

    /// Number of collapsible sections nested inside this block (excluding itself)
    pub fn nested_section_count(&self) -> usize {
        self.children()
            .map(|child| {
                let own = usize::from(matches!(child, ContentBlock::Collapsible { .. }));
                own + child.nested_section_count()
            })
            .sum()
    }

    fn validate(&self, key: &str, path: &str) -> Result<()> {
        let invalid = |message: String| Err(Error::content_invalid(key, format!("{path}: {message}")));

        match self {
            ContentBlock::Heading { text, level, .. } => {
                if text.trim().is_empty() {
                    return invalid("heading text is empty".into());
                }
                if !(1..=3).contains(level) {
                    return invalid(format!("heading level {level} is outside 1..=3"));
                }
            }
            ContentBlock::Paragraph { text } | ContentBlock::Callout { text, .. } => {
                if text.trim().is_empty() {
                    return invalid(format!("{} text is empty", self.kind_name()));
                }
            }
            ContentBlock::List { items, .. } => {
                if items.is_empty() {
                    return invalid("list has no items".into());
                }
                if items.iter().any(|item| item.trim().is_empty()) {
                    return invalid("list contains an empty item".into());
                }
            }
            ContentBlock::Table { headers, rows, .. } => {
                if headers.is_empty() {
                    return invalid("table has no headers".into());
                }
                if let Some((index, row)) = rows
                    .iter()
                    .enumerate()
                    .find(|(_, row)| row.len() != headers.len())
                {
                    return invalid(format!(
                        "table row {index} has {} cells, expected {}",
                        row.len(),
                        headers.len()
                    ));
                }
            }
            ContentBlock::Math { tex } => {
                if tex.trim().is_empty() {
                    return invalid("math expression is empty".into());
                }
            }
            ContentBlock::Collapsible { title, blocks, .. } => {
                if title.trim().is_empty() {
                    return invalid("collapsible title is empty".into());
                }
                if blocks.is_empty() {
                    return invalid(format!("section '{title}' has no blocks"));
                }
                for (index, child) in blocks.iter().enumerate() {
                    child.validate(key, &format!("{path} > '{title}'[{index}]"))?;
                }
            }
            ContentBlock::Columns { columns } => {
                if columns.is_empty() {
                    return invalid("columns group is empty".into());
                }
                for (col, column) in columns.iter().enumerate() {
                    if column.blocks.is_empty() {
                        return invalid(format!("column {col} has no blocks"));
                    }
                    for (index, child) in column.blocks.iter().enumerate() {
                        child.validate(key, &format!("{path} > column {col}[{index}]"))?;
                    }
                }
            }
            ContentBlock::Divider => {}
        }

        Ok(())
    }
}

/// Ordered set of blocks shown for one menu selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Menu key this page belongs to (filled in by the catalogue)
    #[serde(default)]
    pub key: String,
    pub title: String,
    pub blocks: Vec<ContentBlock>,
}

impl Page {
    /// Parse and validate a page document
    pub fn from_toml(key: &str, document: &str) -> Result<Self> {
        let mut page: Page =
            toml::from_str(document).map_err(|e| Error::content_parse(key, e.to_string()))?;
        page.key = key.to_string();
        page.validate()?;
        Ok(page)
    }

    /// Check structural invariants of the page
    pub fn validate(&self) -> Result<()> {
        if self.blocks.is_empty() {
            return Err(Error::content_invalid(&self.key, "page has no blocks"));
        }
        for (index, block) in self.blocks.iter().enumerate() {
            block.validate(&self.key, &format!("block[{index}]"))?;
        }
        Ok(())
    }

    /// Placeholder shown when a key has no content
    pub fn unavailable(key: &str) -> Self {
        Self {
            key: key.to_string(),
            title: "Module not available".to_string(),
            blocks: vec![
                ContentBlock::Heading {
                    text: "Module not available".to_string(),
                    level: 1,
                    icon: None,
                },
                ContentBlock::Callout {
                    kind: CalloutKind::Warning,
                    title: Some("Content unavailable".to_string()),
                    text: format!(
                        "This module is not available. No content is registered for `{key}`."
                    ),
                },
            ],
        }
    }

    /// All blocks in depth-first display order
    pub fn walk(&self) -> Vec<&ContentBlock> {
        fn visit<'a>(block: &'a ContentBlock, out: &mut Vec<&'a ContentBlock>) {
            out.push(block);
            for child in block.children() {
                visit(child, out);
            }
        }

        let mut out = Vec::new();
        for block in &self.blocks {
            visit(block, &mut out);
        }
        out
    }

    /// Collapsible sections in depth-first display order
    ///
    /// Section indices used by the UI refer to positions in this list.
    pub fn sections(&self) -> Vec<&ContentBlock> {
        self.walk()
            .into_iter()
            .filter(|block| matches!(block, ContentBlock::Collapsible { .. }))
            .collect()
    }

    /// Enclosing section of every section, indexed like [`Page::sections`]
    pub fn section_parents(&self) -> Vec<Option<usize>> {
        fn visit(block: &ContentBlock, parent: Option<usize>, out: &mut Vec<Option<usize>>) {
            let parent = if matches!(block, ContentBlock::Collapsible { .. }) {
                out.push(parent);
                Some(out.len() - 1)
            } else {
                parent
            };
            for child in block.children() {
                visit(child, parent, out);
            }
        }

        let mut out = Vec::new();
        for block in &self.blocks {
            visit(block, None, &mut out);
        }
        out
    }

    /// Default expand state of every section, indexed like [`Page::sections`]
    pub fn section_defaults(&self) -> Vec<bool> {
        self.sections()
            .into_iter()
            .map(|block| matches!(block, ContentBlock::Collapsible { expanded: true, .. }))
            .collect()
    }
}
