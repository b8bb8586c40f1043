//! Nested database-style resources released through the built-in adapters

use rstest::rstest;
use std::cell::RefCell;
use std::error::Error as _;
use std::rc::Rc;
use teardown_registry::{
    Connection, ConnectionAdapter, Cursor, ReleaseError, ResourceKind, ResourceRegistry,
    ScopedRegistry, Statement,
};

#[derive(Debug, thiserror::Error)]
#[error("{kind} close failed (sqlstate {sqlstate})")]
struct SqlError {
    kind: &'static str,
    sqlstate: &'static str,
}

type Journal = Rc<RefCell<Vec<&'static str>>>;

struct Handle {
    kind: &'static str,
    fails: bool,
    journal: Journal,
}

impl Handle {
    fn close_handle(&self) -> Result<(), SqlError> {
        self.journal.borrow_mut().push(self.kind);
        if self.fails {
            return Err(SqlError {
                kind: self.kind,
                sqlstate: "08006",
            });
        }
        Ok(())
    }
}

struct Conn(Handle);
struct Stmt(Handle);
struct Rows(Handle);

impl Connection for Conn {
    type Error = SqlError;

    fn close(&self) -> Result<(), SqlError> {
        self.0.close_handle()
    }
}

impl Statement for Stmt {
    type Error = SqlError;

    fn close(&self) -> Result<(), SqlError> {
        self.0.close_handle()
    }
}

impl Cursor for Rows {
    type Error = SqlError;

    fn close(&self) -> Result<(), SqlError> {
        self.0.close_handle()
    }
}

fn handle(kind: &'static str, failing: &str, journal: &Journal) -> Handle {
    Handle {
        kind,
        fails: kind == failing,
        journal: Rc::clone(journal),
    }
}

#[test]
fn test_cursor_closes_before_its_connection() {
    let journal: Journal = Rc::default();
    let conn = Conn(handle("connection", "", &journal));
    let stmt = Stmt(handle("statement", "", &journal));
    let rows = Rows(handle("cursor", "", &journal));

    let mut registry = ResourceRegistry::new();
    let conn_ref = registry.register_connection(&conn);
    let stmt_ref = registry.register_statement(&stmt);
    let rows_ref = registry.register_cursor(&rows);

    assert!(std::ptr::eq(conn_ref, &conn));
    assert!(std::ptr::eq(stmt_ref, &stmt));
    assert!(std::ptr::eq(rows_ref, &rows));
    assert_eq!(
        registry.labels().collect::<Vec<_>>(),
        vec!["cursor", "statement", "connection"]
    );

    registry.release_all().unwrap();
    assert_eq!(*journal.borrow(), vec!["cursor", "statement", "connection"]);
}

#[rstest]
#[case("connection", ResourceKind::Connection)]
#[case("statement", ResourceKind::Statement)]
#[case("cursor", ResourceKind::Cursor)]
fn test_native_failure_is_translated(#[case] failing: &str, #[case] expected: ResourceKind) {
    let journal: Journal = Rc::default();
    let conn = Rc::new(Conn(handle("connection", failing, &journal)));
    let stmt = Rc::new(Stmt(handle("statement", failing, &journal)));
    let rows = Rc::new(Rows(handle("cursor", failing, &journal)));

    let mut registry = ResourceRegistry::new();
    let returned = registry.register_connection(Rc::clone(&conn));
    registry.register_statement(Rc::clone(&stmt));
    registry.register_cursor(Rc::clone(&rows));
    assert!(Rc::ptr_eq(&returned, &conn));

    let err = registry.release_all().unwrap_err();

    // Every handle was still closed.
    assert_eq!(journal.borrow().len(), 3);
    assert_eq!(err.failure_count(), 1);

    let cause = err.source().unwrap();
    let adaptation = cause.downcast_ref::<ReleaseError>().unwrap();
    match adaptation {
        ReleaseError::Adaptation { kind, .. } => assert_eq!(*kind, expected),
        other => panic!("expected an adaptation error, got {other:?}"),
    }

    let native = adaptation
        .source()
        .unwrap()
        .downcast_ref::<SqlError>()
        .unwrap();
    assert_eq!(native.sqlstate, "08006");
    assert_eq!(native.kind, failing);
}

#[test]
fn test_custom_adapter_label_reaches_logs_and_errors() {
    let journal: Journal = Rc::default();
    let primary = Conn(handle("connection", "connection", &journal));
    let replica = Conn(handle("connection", "connection", &journal));

    let mut registry = ResourceRegistry::new();
    let returned = registry.register_with(&primary, |c| ConnectionAdapter::labeled(c, "primary"));
    registry.register_with(&replica, |c| ConnectionAdapter::labeled(c, "replica"));
    assert!(std::ptr::eq(returned, &primary));

    assert_eq!(
        registry.labels().collect::<Vec<_>>(),
        vec!["replica", "primary"]
    );

    let err = registry.release_all().unwrap_err();
    let failed: Vec<_> = err
        .failures()
        .into_iter()
        .map(|failure| match failure {
            ReleaseError::Adaptation { kind, label, .. } => {
                assert_eq!(*kind, ResourceKind::Connection);
                label.as_str()
            }
            other => panic!("expected an adaptation error, got {other:?}"),
        })
        .collect();
    assert_eq!(failed, vec!["replica", "primary"]);
}

#[test]
fn test_scoped_registry_cleans_up_on_error_path() {
    let journal: Journal = Rc::default();
    let conn = Conn(handle("connection", "", &journal));
    let rows = Rows(handle("cursor", "", &journal));

    let query = || -> Result<(), &'static str> {
        let mut scope = ScopedRegistry::new();
        scope.register_connection(&conn);
        scope.register_cursor(&rows);
        Err("constraint violated")
    };

    assert!(query().is_err());
    assert_eq!(*journal.borrow(), vec!["cursor", "connection"]);
}
