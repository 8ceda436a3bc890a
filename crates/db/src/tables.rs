use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

const MIN_TABLE_NAME_LEN: usize = 3;
const MAX_TABLE_NAME_LEN: usize = 255;

/// Logical table identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableName {
    Users,
    Donors,
    Requests,
    Inventory,
}

impl TableName {
    pub const ALL: [TableName; 4] = [
        TableName::Users,
        TableName::Donors,
        TableName::Requests,
        TableName::Inventory,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TableName::Users => "USERS",
            TableName::Donors => "DONORS",
            TableName::Requests => "REQUESTS",
            TableName::Inventory => "INVENTORY",
        }
    }

    /// Environment variable overriding the physical name
    pub fn env_var(self) -> &'static str {
        match self {
            TableName::Users => "DYNAMODB_USERS_TABLE",
            TableName::Donors => "DYNAMODB_DONORS_TABLE",
            TableName::Requests => "DYNAMODB_REQUESTS_TABLE",
            TableName::Inventory => "DYNAMODB_INVENTORY_TABLE",
        }
    }

    pub fn default_name(self) -> &'static str {
        match self {
            TableName::Users => "bbms-users",
            TableName::Donors => "bbms-donors",
            TableName::Requests => "bbms-requests",
            TableName::Inventory => "bbms-inventory",
        }
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TableName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TableName::ALL
            .into_iter()
            .find(|table| table.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownTable(s.to_string()))
    }
}

/// Physical table names keyed by logical name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableNames {
    users: String,
    donors: String,
    requests: String,
    inventory: String,
}

impl TableNames {
    pub(crate) fn resolve(mut name_for: impl FnMut(TableName) -> String) -> Self {
        Self {
            users: name_for(TableName::Users),
            donors: name_for(TableName::Donors),
            requests: name_for(TableName::Requests),
            inventory: name_for(TableName::Inventory),
        }
    }

    pub fn get(&self, table: TableName) -> &str {
        match table {
            TableName::Users => &self.users,
            TableName::Donors => &self.donors,
            TableName::Requests => &self.requests,
            TableName::Inventory => &self.inventory,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TableName, &str)> + '_ {
        TableName::ALL.into_iter().map(move |table| (table, self.get(table)))
    }

    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        self.iter()
            .map(|(table, name)| (table.key(), name.to_string()))
            .collect()
    }

    /// Check every physical name against DynamoDB table naming rules
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (table, name) in self.iter() {
            let reason = if name.len() < MIN_TABLE_NAME_LEN {
                Some("shorter than 3 characters")
            } else if name.len() > MAX_TABLE_NAME_LEN {
                Some("longer than 255 characters")
            } else if !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            {
                Some("allowed characters are a-z, A-Z, 0-9, '_', '-' and '.'")
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(ConfigError::InvalidTableName {
                    table: table.key(),
                    name: name.to_string(),
                    reason,
                });
            }
        }
        Ok(())
    }
}

impl Default for TableNames {
    fn default() -> Self {
        Self::resolve(|table| table.default_name().to_string())
    }
}

impl Serialize for TableNames {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TableName::ALL.len()))?;
        for (table, name) in self.iter() {
            map.serialize_entry(table.key(), name)?;
        }
        map.end()
    }
}
