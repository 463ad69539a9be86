//! SQLite-backed listing store.

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

use crate::model::{
    NewProperty, NewSpace, PropertySizeStat, PropertyView, SearchPage, SpaceStats, SpaceView,
};
use crate::query::{FilterSet, Pagination, PropertyQuery, SpaceQuery};

use super::errors::{StoreError, StoreResult};
use super::schema;
use super::ListingStore;

const PROPERTY_COLUMNS: &str = "id, address, type, price, description";
const SPACE_COLUMNS: &str = "id, property_id, type, size, description";

/// Listing store over a single SQLite connection.
///
/// The connection sits behind a mutex: rusqlite connections are `Send` but
/// not `Sync`. Every operation runs in its own transaction, so a search
/// never observes half of a concurrent insert.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create a database file and apply the schema.
    ///
    /// Missing parent directories are created. File databases use WAL mode.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| {
            row.get::<_, String>(0)
        })
        .map_err(StoreError::Schema)?;

        Self::init(conn)
    }

    /// Open a private in-memory database with the schema applied
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(StoreError::Schema)?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> StoreResult<Self> {
        schema::configure(&conn)?;
        schema::apply(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl ListingStore for SqliteStore {
    fn search_properties(&self, query: &PropertyQuery) -> StoreResult<SearchPage<PropertyView>> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let filters = query.filters();
        let total = count(&tx, "properties", &filters)?;

        let sql = page_sql(
            PROPERTY_COLUMNS,
            "properties",
            &filters,
            query.sort.order_by(),
        );
        let mut properties = {
            let mut stmt = tx.prepare(&sql)?;
            let rows = stmt.query_map(
                params_from_iter(page_values(&filters, &query.pagination)),
                property_from_row,
            )?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        };

        attach_spaces(&tx, &mut properties)?;
        tx.commit()?;

        Ok(SearchPage::new(total, properties))
    }

    fn get_property(&self, id: i64) -> StoreResult<Option<PropertyView>> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let property = tx
            .query_row(
                &format!("SELECT {} FROM properties WHERE id = ?1", PROPERTY_COLUMNS),
                params![id],
                property_from_row,
            )
            .optional()?;

        let property = match property {
            Some(p) => {
                let mut found = [p];
                attach_spaces(&tx, &mut found)?;
                let [p] = found;
                Some(p)
            }
            None => None,
        };

        tx.commit()?;
        Ok(property)
    }

    fn insert_property(&self, property: &NewProperty) -> StoreResult<i64> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO properties (address, type, price, description) VALUES (?1, ?2, ?3, ?4)",
            params![
                property.address,
                property.property_type,
                property.price,
                property.description
            ],
        )?;
        let id = tx.last_insert_rowid();
        insert_spaces(&tx, id, &property.spaces)?;

        tx.commit()?;
        Ok(id)
    }

    fn replace_property(&self, id: i64, property: &NewProperty) -> StoreResult<bool> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let updated = tx.execute(
            "UPDATE properties SET address = ?1, type = ?2, price = ?3, description = ?4
             WHERE id = ?5",
            params![
                property.address,
                property.property_type,
                property.price,
                property.description,
                id
            ],
        )?;
        if updated == 0 {
            return Ok(false);
        }

        tx.execute("DELETE FROM spaces WHERE property_id = ?1", params![id])?;
        insert_spaces(&tx, id, &property.spaces)?;

        tx.commit()?;
        Ok(true)
    }

    fn search_spaces(&self, query: &SpaceQuery) -> StoreResult<SearchPage<SpaceView>> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let filters = query.filters();
        let total = count(&tx, "spaces", &filters)?;

        let sql = page_sql(SPACE_COLUMNS, "spaces", &filters, SpaceQuery::ORDER_BY);
        let spaces = {
            let mut stmt = tx.prepare(&sql)?;
            let rows = stmt.query_map(
                params_from_iter(page_values(&filters, &query.pagination)),
                space_from_row,
            )?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        };

        tx.commit()?;
        Ok(SearchPage::new(total, spaces))
    }

    fn space_stats(&self) -> StoreResult<SpaceStats> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        // AVG over zero rows is NULL.
        let overall: Option<f64> =
            tx.query_row("SELECT AVG(size) FROM spaces", [], |row| row.get(0))?;

        let per_property = {
            let mut stmt = tx.prepare(
                "SELECT s.property_id, p.address, AVG(s.size) AS avg_size
                 FROM spaces s
                 JOIN properties p ON p.id = s.property_id
                 GROUP BY s.property_id, p.address
                 ORDER BY avg_size DESC, s.property_id ASC",
            )?;
            let rows = stmt.query_map([], |row| {
                Ok(PropertySizeStat {
                    property_id: row.get(0)?,
                    address: row.get(1)?,
                    avg_size: row.get(2)?,
                })
            })?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        };

        tx.commit()?;
        Ok(SpaceStats {
            overall,
            per_property,
        })
    }
}

fn count(conn: &Connection, table: &str, filters: &FilterSet) -> StoreResult<u64> {
    let sql = format!("SELECT COUNT(*) FROM {}{}", table, filters.where_clause());
    let total: i64 = conn.query_row(&sql, params_from_iter(filters.values()), |row| row.get(0))?;
    Ok(total.max(0) as u64)
}

/// `SELECT ... WHERE ... ORDER BY ... LIMIT ?n OFFSET ?n+1`, with the window
/// placeholders numbered after the filter values.
fn page_sql(columns: &str, table: &str, filters: &FilterSet, order_by: &str) -> String {
    let n = filters.len();
    format!(
        "SELECT {} FROM {}{} ORDER BY {} LIMIT ?{} OFFSET ?{}",
        columns,
        table,
        filters.where_clause(),
        order_by,
        n + 1,
        n + 2
    )
}

fn page_values(filters: &FilterSet, pagination: &Pagination) -> Vec<Value> {
    filters
        .values()
        .cloned()
        .chain([
            Value::Integer(pagination.limit() as i64),
            Value::Integer(pagination.offset() as i64),
        ])
        .collect()
}

/// Load the spaces of every given property with a single query.
fn attach_spaces(conn: &Connection, properties: &mut [PropertyView]) -> StoreResult<()> {
    if properties.is_empty() {
        return Ok(());
    }

    let placeholders: Vec<String> = (1..=properties.len()).map(|i| format!("?{}", i)).collect();
    let sql = format!(
        "SELECT {} FROM spaces WHERE property_id IN ({}) ORDER BY id ASC",
        SPACE_COLUMNS,
        placeholders.join(", ")
    );

    let mut by_property: HashMap<i64, Vec<SpaceView>> = HashMap::new();
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params_from_iter(properties.iter().map(|p| p.id)),
        space_from_row,
    )?;
    for space in rows {
        let space = space?;
        by_property.entry(space.property_id).or_default().push(space);
    }

    for property in properties.iter_mut() {
        property.spaces = by_property.remove(&property.id).unwrap_or_default();
    }

    Ok(())
}

fn insert_spaces(conn: &Connection, property_id: i64, spaces: &[NewSpace]) -> StoreResult<()> {
    let mut stmt = conn.prepare(
        "INSERT INTO spaces (property_id, type, size, description) VALUES (?1, ?2, ?3, ?4)",
    )?;
    for space in spaces {
        stmt.execute(params![
            property_id,
            space.space_type,
            space.size,
            space.description
        ])?;
    }
    Ok(())
}

fn property_from_row(row: &Row<'_>) -> rusqlite::Result<PropertyView> {
    Ok(PropertyView {
        id: row.get(0)?,
        address: row.get(1)?,
        property_type: row.get(2)?,
        price: row.get(3)?,
        description: row.get(4)?,
        spaces: Vec::new(),
    })
}

fn space_from_row(row: &Row<'_>) -> rusqlite::Result<SpaceView> {
    Ok(SpaceView {
        id: row.get(0)?,
        property_id: row.get(1)?,
        space_type: row.get(2)?,
        size: row.get(3)?,
        description: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PropertyType, SpaceType};
    use crate::query::PropertySort;

    fn new_property(address: &str, property_type: PropertyType, price: f64) -> NewProperty {
        NewProperty {
            address: address.to_string(),
            property_type,
            price,
            description: None,
            spaces: Vec::new(),
        }
    }

    fn new_space(space_type: SpaceType, size: f64) -> NewSpace {
        NewSpace {
            space_type,
            size,
            description: None,
        }
    }

    #[test]
    fn test_insert_and_get_with_spaces() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut property = new_property("1 A St", PropertyType::House, 100_000.0);
        property.spaces = vec![
            new_space(SpaceType::Bedroom, 200.0),
            new_space(SpaceType::Kitchen, 100.0),
        ];

        let id = store.insert_property(&property).unwrap();
        let view = store.get_property(id).unwrap().unwrap();

        assert_eq!(view.address, "1 A St");
        assert_eq!(view.spaces.len(), 2);
        assert!(view.spaces.iter().all(|s| s.property_id == id));
    }

    #[test]
    fn test_get_missing_property() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(store.get_property(999).unwrap().is_none());
    }

    #[test]
    fn test_failed_space_insert_rolls_back_property() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut property = new_property("1 A St", PropertyType::House, 100_000.0);
        // SQLite binds NaN as NULL, which violates `size NOT NULL`.
        property.spaces = vec![
            new_space(SpaceType::Bedroom, 10.0),
            new_space(SpaceType::Kitchen, f64::NAN),
        ];

        assert!(store.insert_property(&property).is_err());

        let page = store.search_properties(&PropertyQuery::default()).unwrap();
        assert_eq!(page.total, 0);
        let spaces = store.search_spaces(&SpaceQuery::default()).unwrap();
        assert_eq!(spaces.total, 0);
    }

    #[test]
    fn test_search_attaches_spaces_to_each_row() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut a = new_property("A", PropertyType::House, 1.0);
        a.spaces = vec![new_space(SpaceType::Bedroom, 5.0)];
        let b = new_property("B", PropertyType::Condo, 2.0);
        store.insert_property(&a).unwrap();
        store.insert_property(&b).unwrap();

        let page = store
            .search_properties(&PropertyQuery {
                sort: PropertySort::PriceDesc,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.items[0].address, "B");
        assert!(page.items[0].spaces.is_empty());
        assert_eq!(page.items[1].spaces.len(), 1);
    }

    #[test]
    fn test_replace_swaps_spaces() {
        let store = SqliteStore::open_in_memory().unwrap();
        let mut original = new_property("Old", PropertyType::House, 1.0);
        original.spaces = vec![
            new_space(SpaceType::Bedroom, 5.0),
            new_space(SpaceType::Kitchen, 6.0),
        ];
        let id = store.insert_property(&original).unwrap();

        let mut replacement = new_property("New", PropertyType::Apartment, 2.0);
        replacement.spaces = vec![new_space(SpaceType::Bathroom, 7.0)];
        assert!(store.replace_property(id, &replacement).unwrap());

        let view = store.get_property(id).unwrap().unwrap();
        assert_eq!(view.address, "New");
        assert_eq!(view.property_type, PropertyType::Apartment);
        assert_eq!(view.spaces.len(), 1);
        assert_eq!(view.spaces[0].space_type, SpaceType::Bathroom);

        let all = store.search_spaces(&SpaceQuery::default()).unwrap();
        assert_eq!(all.total, 1);
    }

    #[test]
    fn test_replace_missing_property() {
        let store = SqliteStore::open_in_memory().unwrap();
        let replacement = new_property("New", PropertyType::Apartment, 2.0);
        assert!(!store.replace_property(7, &replacement).unwrap());
    }

    #[test]
    fn test_unknown_stored_type_is_invalid_row() {
        let store = SqliteStore::open_in_memory().unwrap();
        {
            let conn = store.lock().unwrap();
            conn.execute(
                "INSERT INTO properties (address, type, price) VALUES ('X', 'castle', 1.0)",
                [],
            )
            .unwrap();
        }

        let err = store.search_properties(&PropertyQuery::default()).unwrap_err();
        assert!(matches!(err, StoreError::InvalidRow(_)));
    }

    #[test]
    fn test_stats_empty() {
        let store = SqliteStore::open_in_memory().unwrap();
        let stats = store.space_stats().unwrap();
        assert_eq!(stats.overall, None);
        assert!(stats.per_property.is_empty());
    }
}
