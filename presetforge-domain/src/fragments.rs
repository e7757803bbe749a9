use crate::error::GenerateError;
use indexmap::IndexMap;
use presetforge_hash::content_key;
use presetforge_types::fragment::{
    ComboFragment, FragmentRef, FragmentSet, ListFragment, TextFragment,
};
use presetforge_types::schema::{Column, Enumeration, SchemaEntry};
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// Hashed form of an enumeration column, minus its enumeration payload.
#[derive(Serialize)]
struct ComboContent<'a> {
    kind: &'static str,
    name: &'a str,
    desc: &'a str,
    default: Option<&'a str>,
    list: &'a str,
}

/// Hashed form of a scalar-text column.
#[derive(Serialize)]
struct TextContent<'a> {
    kind: &'static str,
    name: &'a str,
    desc: &'a str,
    default: Option<&'a str>,
    length: Option<&'a str>,
}

/// Output of a full ingest: the unique fragments plus each entry's column -> fragment sequence.
#[derive(Debug, Clone, Default)]
pub struct Ingested {
    pub fragments: FragmentSet,
    /// Parallel to the ingested entries.
    pub sequences: Vec<Vec<FragmentRef>>,
}

/// Accumulates unique list, combo and text fragments keyed by content.
///
/// Registration is idempotent: equal content always yields the key assigned the first time.
#[derive(Debug, Default)]
pub struct FragmentIndex {
    lists: IndexMap<String, ListFragment>,
    combos: IndexMap<String, ComboFragment>,
    texts: IndexMap<String, TextFragment>,
}

impl FragmentIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingest a whole family with a fresh index.
    pub fn ingest(entries: &[SchemaEntry]) -> Result<Ingested, GenerateError> {
        let mut index = Self::new();
        let sequences = entries
            .iter()
            .map(|e| index.ingest_entry(e))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            lists = index.lists.len(),
            combos = index.combos.len(),
            texts = index.texts.len(),
            "fragments indexed"
        );

        Ok(Ingested {
            fragments: index.into_fragments(),
            sequences,
        })
    }

    /// Register every column of `entry`, returning its fragment sequence in column order.
    pub fn ingest_entry(&mut self, entry: &SchemaEntry) -> Result<Vec<FragmentRef>, GenerateError> {
        entry
            .columns
            .iter()
            .map(|col| -> Result<FragmentRef, GenerateError> {
                Ok(FragmentRef {
                    column: col.name.clone(),
                    key: self.register_column(col)?,
                })
            })
            .collect()
    }

    /// Register one column and return the key of the fragment it maps to.
    pub fn register_column(&mut self, col: &Column) -> Result<String, GenerateError> {
        if col.is_enumeration() {
            let list_key = self.register_list(&col.enumerations)?;
            let key = content_key(&ComboContent {
                kind: "combo",
                name: &col.name,
                desc: &col.desc,
                default: col.default.as_deref(),
                list: &list_key,
            })?;
            let fragment = ComboFragment {
                key: key.clone(),
                name: col.name.clone(),
                desc: col.desc.clone(),
                default: col.default.clone(),
                values_searchable: true,
                list_key,
            };
            self.ensure_unclaimed(&key, Category::Combo)?;
            insert_unique(&mut self.combos, key, fragment)
        } else {
            let key = content_key(&TextContent {
                kind: "text",
                name: &col.name,
                desc: &col.desc,
                default: col.default.as_deref(),
                length: col.length.as_deref().filter(|l| !l.is_empty()),
            })?;
            let fragment = TextFragment {
                key: key.clone(),
                name: col.name.clone(),
                desc: col.desc.clone(),
                default: col.default.clone(),
                length: col.length.clone().filter(|l| !l.is_empty()),
            };
            self.ensure_unclaimed(&key, Category::Text)?;
            insert_unique(&mut self.texts, key, fragment)
        }
    }

    fn register_list(&mut self, enumerations: &[Enumeration]) -> Result<String, GenerateError> {
        let mut entries = enumerations.to_vec();
        sort_enumerations(&mut entries);
        let key = content_key(&entries)?;
        let fragment = ListFragment {
            key: key.clone(),
            entries,
        };
        self.ensure_unclaimed(&key, Category::List)?;
        insert_unique(&mut self.lists, key, fragment)
    }

    /// A key may live in exactly one category; chunk ids share one namespace in the output.
    fn ensure_unclaimed(&self, key: &str, category: Category) -> Result<(), GenerateError> {
        let taken = (category != Category::List && self.lists.contains_key(key))
            || (category != Category::Combo && self.combos.contains_key(key))
            || (category != Category::Text && self.texts.contains_key(key));
        if taken {
            return Err(GenerateError::KeyCollision {
                key: key.to_string(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lists.len() + self.combos.len() + self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_fragments(self) -> FragmentSet {
        FragmentSet {
            lists: self.lists.into_values().collect(),
            combos: self.combos.into_values().collect(),
            texts: self.texts.into_values().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    List,
    Combo,
    Text,
}

fn insert_unique<T: PartialEq>(
    map: &mut IndexMap<String, T>,
    key: String,
    fragment: T,
) -> Result<String, GenerateError> {
    match map.get(&key) {
        Some(existing) if *existing == fragment => Ok(key),
        Some(_) => Err(GenerateError::KeyCollision { key }),
        None => {
            map.insert(key.clone(), fragment);
            Ok(key)
        }
    }
}

fn numeric_value(e: &Enumeration) -> Option<f64> {
    e.value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Sort list entries ascending.
///
/// Numerically when every value parses as a number, otherwise case-insensitively as text. Ties
/// fall back to the raw value and then the name, so the result does not depend on declared order.
pub fn sort_enumerations(entries: &mut [Enumeration]) {
    let all_numeric = entries.iter().all(|e| numeric_value(e).is_some());
    if all_numeric {
        entries.sort_by(|a, b| {
            let primary = match (numeric_value(a), numeric_value(b)) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => Ordering::Equal,
            };
            primary
                .then_with(|| a.value.cmp(&b.value))
                .then_with(|| a.name.cmp(&b.name))
        });
    } else {
        entries.sort_by_cached_key(|e| (e.value.to_uppercase(), e.value.clone(), e.name.clone()));
    }
}
