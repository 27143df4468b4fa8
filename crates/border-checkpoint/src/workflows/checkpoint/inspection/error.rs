/// Fatal input errors. Each one aborts the bulletin or inspection call that raised it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid document type: '{0}'")]
    UnknownDocumentKind(String),
    #[error("bulletin '{bulletin}' does not name a required document")]
    MissingRequirement { bulletin: String },
    #[error("invalid subject '{subject}': expected a list of nations after 'Citizens of'")]
    InvalidSubject { subject: String },
}
