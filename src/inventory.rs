//! Per-player inventories from a published sheet
//!
//! Layout: the first row is `item, Player1, Player2, ...`; each later row is
//! an item name followed by one quantity per player.

use crate::csv::{is_blank_line, CsvParser};
use indexmap::IndexMap;
use tracing::{debug, warn};

/// A held item and how many of it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InventoryItem {
    pub item: String,
    pub qty: f64,
}

/// Items grouped by player, players in sheet order
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Inventory {
    players: Vec<String>,
    items_by_player: IndexMap<String, Vec<InventoryItem>>,
}

impl Inventory {
    /// Parse CSV text into an inventory
    ///
    /// # Examples
    ///
    /// ```
    /// use sheetfeed::Inventory;
    ///
    /// let inventory = Inventory::parse("item,Ana,Ben\nRope,2,\nLamp,0,1\n");
    /// assert_eq!(inventory.players(), ["Ana", "Ben"]);
    /// assert_eq!(inventory.items("Ana")[0].item, "Rope");
    /// assert_eq!(inventory.items("Ben")[0].qty, 1.0);
    /// ```
    pub fn parse(text: &str) -> Self {
        Self::from_rows(&CsvParser::default().parse(text))
    }

    /// Build an inventory from parsed rows
    ///
    /// Whitespace-only lines are dropped before the header row is chosen.
    /// Blank item names and blank player columns are skipped, as are
    /// quantities that are not positive finite numbers.
    pub fn from_rows(rows: &[Vec<String>]) -> Self {
        let rows: Vec<&Vec<String>> = rows.iter().filter(|row| !is_blank_line(row)).collect();
        let Some((header_row, data)) = rows.split_first() else {
            warn!("inventory sheet has no rows");
            return Inventory::default();
        };
        if data.is_empty() {
            warn!("inventory sheet has no item rows");
            return Inventory::default();
        }

        let headers: Vec<&str> = header_row.iter().map(|h| h.trim()).collect();
        if headers.len() < 2 {
            warn!("inventory sheet needs an item column and at least one player");
            return Inventory::default();
        }

        let players: Vec<String> = headers[1..].iter().map(|p| p.to_string()).collect();
        let mut items_by_player: IndexMap<String, Vec<InventoryItem>> = players
            .iter()
            .filter(|p| !p.is_empty())
            .map(|p| (p.clone(), Vec::new()))
            .collect();

        for row in data {
            let item = row.first().map(|c| c.trim()).unwrap_or("");
            if item.is_empty() {
                continue;
            }

            for (col, player) in players.iter().enumerate() {
                if player.is_empty() {
                    continue;
                }
                let Some(qty) = row.get(col + 1).and_then(|c| parse_quantity(c)) else {
                    continue;
                };
                items_by_player
                    .entry(player.clone())
                    .or_default()
                    .push(InventoryItem {
                        item: item.to_string(),
                        qty,
                    });
            }
        }

        debug!(players = players.len(), "parsed inventory");
        Inventory {
            players,
            items_by_player,
        }
    }

    /// Player names from the header row, blanks included
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Items held by a player, empty for unknown players
    pub fn items(&self, player: &str) -> &[InventoryItem] {
        self.items_by_player
            .get(player)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate `(player, items)` for every named player
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[InventoryItem])> {
        self.items_by_player
            .iter()
            .map(|(p, items)| (p.as_str(), items.as_slice()))
    }

    /// Check if no player was found
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

fn parse_quantity(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    cell.parse::<f64>()
        .ok()
        .filter(|qty| qty.is_finite() && *qty > 0.0)
}
