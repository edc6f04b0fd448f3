use tracing::Span;

pub fn record_error<T, E: std::fmt::Display>(result: Result<T, E>) -> Result<T, E> {
    if let Err(ref e) = result {
        insert_error_fields(e);
    }
    result
}

pub fn insert_error_fields(error: impl std::fmt::Display) {
    Span::current().record("error", &tracing::field::display("true"));
    Span::current().record("error.message", &tracing::field::display(error));
}
