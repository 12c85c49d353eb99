//! SQL `GRANT` statement generation from collected catalog entries.

use serde::{Deserialize, Serialize};

use crate::model::CatalogEntry;

/// One flattened grant, paired with the SQL statement it was rendered into.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantRecord {
    /// Privilege with underscores replaced by spaces, e.g. `ALTER REFLECTION`.
    pub privilege: String,
    /// Upper-cased object type the privilege applies to.
    pub object_type: String,
    /// Path of the object the privilege applies to.
    pub scope: Vec<String>,
    /// Kind of grantee, e.g. `USER` or `ROLE`.
    pub grantee_type: String,
    /// Grantee identifier.
    pub grantee_id: String,
}

/// Renders every grant on every entry into SQL `GRANT` statements.
///
/// Returns the flat grant records and the statements joined into one
/// semicolon-and-newline-delimited script. Entries with no grants (or whose
/// grants could not be retrieved) are skipped entirely; one statement is
/// emitted per privilege string.
#[must_use]
pub fn format_grants(entries: &[CatalogEntry]) -> (Vec<GrantRecord>, String) {
    let mut records = Vec::new();
    let mut script = String::new();

    for entry in entries {
        let Some(grants) = &entry.grants else {
            continue;
        };
        if grants.is_empty() {
            continue;
        }

        let scope = entry
            .object_path
            .iter()
            .map(|segment| format!("\"{segment}\""))
            .collect::<Vec<_>>()
            .join(".");
        let object_type = entry.object_type.to_uppercase();

        for grant in grants {
            for privilege in &grant.privileges {
                let privilege = privilege.replace('_', " ");
                let statement = format!(
                    "GRANT {privilege} ON {object_type} {scope} TO {} \"{}\"",
                    grant.grantee_type, grant.name
                );
                script.push_str(&statement);
                script.push_str(";\n");
                records.push(GrantRecord {
                    privilege,
                    object_type: object_type.clone(),
                    scope: entry.object_path.clone(),
                    grantee_type: grant.grantee_type.clone(),
                    grantee_id: grant.name.clone(),
                });
            }
        }
    }

    (records, script)
}
