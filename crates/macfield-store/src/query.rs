use rusqlite::types::Value;

/// Search over orders. Each text term must match somewhere: the order id,
/// a billing field, or the value stored under one of the registered meta
/// keys (the extension's search contract).
#[derive(Debug, Default, Clone)]
pub struct OrderQuery {
    pub text_terms: Vec<String>,
    pub meta_keys: Vec<String>,
}

pub struct SqlQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

impl OrderQuery {
    pub fn new(text_terms: Vec<String>, meta_keys: Vec<String>) -> Self {
        Self {
            text_terms,
            meta_keys,
        }
    }

    pub fn to_sql(&self) -> SqlQuery {
        let mut clauses: Vec<String> = Vec::new();
        let mut params: Vec<Value> = Vec::new();

        for term in &self.text_terms {
            let like = format!("%{}%", term);
            let mut alternatives = vec![
                "orders.id LIKE ?".to_string(),
                "billing_name LIKE ?".to_string(),
                "billing_email LIKE ?".to_string(),
            ];
            params.push(Value::from(like.clone()));
            params.push(Value::from(like.clone()));
            params.push(Value::from(like.clone()));

            if !self.meta_keys.is_empty() {
                let placeholders = vec!["?"; self.meta_keys.len()].join(", ");
                alternatives.push(format!(
                    "EXISTS (SELECT 1 FROM order_meta m WHERE m.order_id = orders.id AND m.meta_key IN ({}) AND m.meta_value LIKE ?)",
                    placeholders
                ));
                for key in &self.meta_keys {
                    params.push(Value::from(key.clone()));
                }
                params.push(Value::from(like));
            }

            clauses.push(format!("({})", alternatives.join(" OR ")));
        }

        let where_sql = if clauses.is_empty() {
            String::new()
        } else {
            format!(" WHERE {}", clauses.join(" AND "))
        };

        SqlQuery {
            sql: format!(
                "SELECT id, billing_name, billing_email, created_at, updated_at \
                 FROM orders{} ORDER BY created_at DESC, id;",
                where_sql
            ),
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OrderQuery;

    #[test]
    fn empty_query_selects_everything() {
        let built = OrderQuery::default().to_sql();
        assert!(!built.sql.contains("WHERE"));
        assert!(built.params.is_empty());
    }

    #[test]
    fn terms_and_meta_keys_become_clauses() {
        let query = OrderQuery::new(
            vec!["AA:BB".to_string()],
            vec!["_mac_address".to_string()],
        );
        let built = query.to_sql();
        assert!(built.sql.contains("billing_name LIKE ?"));
        assert!(built.sql.contains("m.meta_key IN (?)"));
        // id + name + email + meta key + meta value
        assert_eq!(built.params.len(), 5);
    }
}
