//! Appwrite query encoders
//!
//! Queries are sent as JSON strings in repeated `queries[]` parameters.

use serde_json::{json, Value};

fn encode(method: &str, attribute: Option<&str>, values: Option<Vec<Value>>) -> String {
    let mut query = json!({ "method": method });
    if let Some(attribute) = attribute {
        query["attribute"] = json!(attribute);
    }
    if let Some(values) = values {
        query["values"] = Value::Array(values);
    }
    query.to_string()
}

pub fn equal(attribute: &str, value: &str) -> String {
    encode("equal", Some(attribute), Some(vec![json!(value)]))
}

pub fn order_desc(attribute: &str) -> String {
    encode("orderDesc", Some(attribute), None)
}

pub fn limit(count: u32) -> String {
    encode("limit", None, Some(vec![json!(count)]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(query: &str) -> Value {
        serde_json::from_str(query).unwrap()
    }

    #[test]
    fn encodes_equal() {
        assert_eq!(
            parse(&equal("accountId", "a1")),
            json!({ "method": "equal", "attribute": "accountId", "values": ["a1"] })
        );
    }

    #[test]
    fn encodes_order_and_limit() {
        assert_eq!(
            parse(&order_desc("$createdAt")),
            json!({ "method": "orderDesc", "attribute": "$createdAt" })
        );
        assert_eq!(parse(&limit(20)), json!({ "method": "limit", "values": [20] }));
    }
}
