//! Pure translations from query descriptions to MongoDB documents

use crate::query::sort::ID_FIELD;
use crate::query::{FacetSpec, Predicate, SortOrder, SortSpec};
use mongodb::bson::{self, doc, Bson, Document};
use serde_json::Value;

/// Convert a JSON value into BSON
pub fn to_bson(value: &Value) -> Result<Bson, bson::ser::Error> {
    bson::to_bson(value)
}

/// Convert a BSON value into plain JSON (numbers stay numbers)
pub fn to_json(value: Bson) -> Value {
    value.into_relaxed_extjson()
}

/// Read an integer out of whatever numeric type the driver returned
pub fn bson_to_i64(value: &Bson) -> Option<i64> {
    match value {
        Bson::Int32(n) => Some(i64::from(*n)),
        Bson::Int64(n) => Some(*n),
        Bson::Double(n) if n.fract() == 0.0 => Some(*n as i64),
        _ => None,
    }
}

fn single(field: &str, value: impl Into<Bson>) -> Document {
    let mut document = Document::new();
    document.insert(field, value);
    document
}

/// Translate a predicate into a MongoDB filter document
pub fn filter_document(predicate: &Predicate) -> Result<Document, bson::ser::Error> {
    Ok(match predicate {
        Predicate::All => Document::new(),
        Predicate::Eq { field, value } => single(field, to_bson(value)?),
        Predicate::ContainsText { field, needle } => single(
            field,
            doc! { "$regex": regex::escape(needle), "$options": "i" },
        ),
        Predicate::Range { field, min, max } => {
            let mut bounds = Document::new();
            if let Some(min) = min {
                bounds.insert("$gte", *min);
            }
            if let Some(max) = max {
                bounds.insert("$lte", *max);
            }
            single(field, bounds)
        }
        Predicate::Exists { field, exists } => single(field, doc! { "$exists": *exists }),
        Predicate::And(terms) => single("$and", combine(terms)?),
        Predicate::Or(terms) => single("$or", combine(terms)?),
    })
}

fn combine(terms: &[Predicate]) -> Result<Vec<Bson>, bson::ser::Error> {
    terms
        .iter()
        .map(|t| filter_document(t).map(Bson::Document))
        .collect()
}

/// Translate a sort into a MongoDB sort document (with the id tiebreak)
pub fn sort_document(sort: &SortSpec) -> Document {
    let direction = match sort.order {
        SortOrder::Asc => 1,
        SortOrder::Desc => -1,
    };
    let mut document = single(&sort.field, direction);
    if sort.needs_tiebreak() {
        document.insert(ID_FIELD, 1);
    }
    document
}

/// Aggregation pipeline for a group-and-count facet
pub fn facet_pipeline(spec: &FacetSpec) -> Vec<Document> {
    let path = format!("${}", spec.field);
    let mut pipeline = Vec::new();
    if spec.unwind {
        pipeline.push(doc! { "$unwind": path.clone() });
    }
    pipeline.push(doc! { "$group": { "_id": path, "count": { "$sum": 1 } } });
    pipeline.push(doc! { "$match": { "_id": { "$nin": [Bson::Null, ""] } } });
    pipeline.push(doc! { "$sort": { "count": -1, "_id": 1 } });
    if let Some(limit) = spec.limit {
        let limit = limit as i64;
        pipeline.push(doc! { "$limit": limit });
    }
    pipeline
}

/// Aggregation pipeline summing `field` over matching documents
pub fn sum_pipeline(filter: Document, field: &str) -> Vec<Document> {
    vec![
        doc! { "$match": filter },
        doc! { "$group": { "_id": Bson::Null, "total": { "$sum": format!("${}", field) } } },
    ]
}
