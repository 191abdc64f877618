use crypt_core::errors::{CryptError, ExError, ExErrorKind};
use crypt_core::SnippetId;

#[test]
fn test_empty_content_verifiable_by_kind() {
    let ex_err: ExError = CryptError::EmptyContent.into();

    assert_eq!(ex_err.kind(), ExErrorKind::EmptyContent);
    assert_eq!(ex_err.code(), "ERR_EMPTY_CONTENT");
    assert_eq!(ex_err.op(), Some("bury"));
}

#[test]
fn test_not_found_carries_id() {
    let ex_err: ExError = CryptError::SnippetNotFound {
        snippet_id: SnippetId::from_string("abc"),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::NotFound);
    assert_eq!(ex_err.snippet_id().map(|id| id.as_str()), Some("abc"));
}

#[test]
fn test_persistence_keeps_op_and_message() {
    let ex_err: ExError = CryptError::persistence("replace", "disk full").into();

    assert_eq!(ex_err.kind(), ExErrorKind::Persistence);
    assert_eq!(ex_err.op(), Some("replace"));
    assert_eq!(ex_err.message(), "disk full");
    assert_eq!(
        ex_err.to_string(),
        "[ERR_PERSISTENCE] in operation 'replace': disk full"
    );
}

#[test]
fn test_file_unavailable_carries_path() {
    let ex_err: ExError = CryptError::FileUnavailable {
        file_path: "/gone.ts".to_string(),
    }
    .into();

    assert_eq!(ex_err.kind(), ExErrorKind::FileUnavailable);
    assert_eq!(ex_err.file_path(), Some("/gone.ts"));
}

#[test]
fn test_codes_are_unique() {
    let kinds = [
        ExErrorKind::InvalidInput,
        ExErrorKind::EmptyContent,
        ExErrorKind::NotFound,
        ExErrorKind::FileUnavailable,
        ExErrorKind::Io,
        ExErrorKind::Serialization,
        ExErrorKind::Persistence,
        ExErrorKind::Internal,
    ];
    let codes: std::collections::HashSet<&str> = kinds.iter().map(|k| k.code()).collect();
    assert_eq!(codes.len(), kinds.len());
}
