use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpecError {
    #[error("malformed field spec '{0}', expected 'name:Type'")]
    MalformedFieldSpec(String),
}
