use tokio_postgres::types::ToSql;

// Type aliases for PostgreSQL parameter types
pub type PgParam = dyn ToSql + Sync;
pub type PgSendParam = dyn ToSql + Sync + Send;
pub type PgParamBox = Box<PgSendParam>;
pub type PgParamVec = Vec<PgParamBox>;

/// Accumulates `AND`-joined predicates together with their bound
/// parameters, numbering placeholders in push order.
#[derive(Default)]
pub struct FilterQuery {
    clauses: Vec<String>,
    params: PgParamVec,
}

impl FilterQuery {
    pub fn new() -> Self { Self::default() }

    /// Binds `value` and adds `clause`, in which every `{}` stands for the
    /// bound placeholder.
    pub fn bind<T>(&mut self, clause: &str, value: T) -> &mut Self
    where
        T: ToSql + Sync + Send + 'static,
    {
        self.params.push(Box::new(value));
        let placeholder = format!("${}", self.params.len());
        self.clauses.push(clause.replace("{}", &placeholder));
        self
    }

    /// Adds a predicate without parameters.
    pub fn raw(&mut self, clause: &str) -> &mut Self {
        self.clauses.push(clause.to_string());
        self
    }

    pub fn where_clause(&self) -> String {
        if self.clauses.is_empty() {
            return String::new();
        }
        format!(" WHERE {}", self.clauses.join(" AND "))
    }

    /// `LIMIT`/`OFFSET` suffix. Binds its values after every predicate, so
    /// call it last.
    pub fn page(&mut self, limit: Option<i64>, offset: i64) -> String {
        let mut suffix = String::new();
        if let Some(limit) = limit {
            self.params.push(Box::new(limit));
            suffix.push_str(&format!(" LIMIT ${}", self.params.len()));
        }
        if offset > 0 {
            self.params.push(Box::new(offset));
            suffix.push_str(&format!(" OFFSET ${}", self.params.len()));
        }
        suffix
    }

    pub fn param_refs(&self) -> Vec<&PgParam> {
        self.params
            .iter()
            .map(|p| p.as_ref() as &PgParam)
            .collect()
    }

    pub fn param_count(&self) -> usize { self.params.len() }
}
