mod common;

#[test]
fn test_creates_pool_and_connects() {
    let test_db = common::TestDb::new("test_creates_pool_and_connects.db");
    let conn = test_db.pool().get();
    assert!(conn.is_ok());
}
