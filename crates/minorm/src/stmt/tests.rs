//! Cross-builder tests for the stmt module.

use crate::stmt::{DeleteStmt, InsertStmt, Predicate, UpdateStmt};
use crate::value::Value;

#[test]
fn build_is_idempotent() {
    let update = UpdateStmt::new("billing", "accounts")
        .set("balance", 100)
        .filter(Predicate::eq("id", 7));
    assert_eq!(update.build(), update.build());

    let insert = InsertStmt::new("billing", "accounts").set("id", 1);
    assert_eq!(insert.build(), insert.build());

    let delete = DeleteStmt::new("billing", "accounts").filter(Predicate::eq("id", 7));
    assert_eq!(delete.build(), delete.build());
}

#[test]
fn placeholder_count_matches_param_count() {
    let stmt = UpdateStmt::new("billing", "accounts")
        .set("a", 1)
        .set("b", 2)
        .set("c", 3)
        .filter(Predicate::new("d = ? and e = ?").bind(4).bind(5))
        .build();
    assert_eq!(stmt.sql.matches('?').count(), stmt.params.len());
    assert_eq!(stmt.params.len(), 5);
}

#[test]
fn set_params_precede_predicate_params() {
    let stmt = UpdateStmt::new("billing", "accounts")
        .filter(Predicate::eq("id", 99))
        .set("balance", 1)
        .build();
    // Predicate was attached first, but its parameter still comes last.
    assert_eq!(stmt.params, vec![Value::Int(1), Value::Int(99)]);
}

#[test]
fn quoted_table_names_are_qualified() {
    let stmt = InsertStmt::new("billing", "account history").set("id", 1).build();
    assert_eq!(
        stmt.sql,
        r#"insert into billing."account history" (id) values (?);"#
    );
}

#[test]
fn statements_end_with_terminator() {
    for sql in [
        UpdateStmt::new("s", "t").set("a", 1).build().sql,
        InsertStmt::new("s", "t").set("a", 1).build().sql,
        DeleteStmt::new("s", "t").build().sql,
    ] {
        assert!(sql.ends_with(';'), "missing terminator: {sql}");
    }
}
