mod common;
use common::*;

#[test]
fn test_save_writes_numbered_lines_in_order() {
    let (mut r, con) = interpreter();
    r.enter("20 PRINT 2");
    r.enter("10 PRINT 1");
    r.enter("SAVE \"PROG\"");
    assert_eq!(
        con.file("PROG"),
        Some(vec!["10 PRINT 1".to_string(), "20 PRINT 2".to_string()])
    );
}

#[test]
fn test_load_replaces_the_program() {
    let (mut r, con) = interpreter();
    con.put_file("OTHER", &["10 PRINT \"LOADED\""]);
    r.enter("10 PRINT \"OLD\"");
    r.enter("90 A=1");
    r.enter("LOAD \"OTHER\"");
    r.enter("LIST");
    assert_eq!(con.take_output(), "10 PRINT \"LOADED\"\n");
    r.enter("RUN");
    assert_eq!(con.take_output(), "LOADED\n");
}

#[test]
fn test_save_load_round_trip() {
    let (mut r, con) = interpreter();
    r.enter("10 FOR I=1 TO 2");
    r.enter("20 PRINT I;");
    r.enter("30 NEXT");
    r.enter("SAVE \"LOOP\"");
    r.enter("NEW");
    r.enter("LOAD \"LOOP\"");
    r.enter("RUN");
    assert_eq!(con.take_output(), " 1  2 \n");
}

#[test]
fn test_missing_file() {
    let (mut r, con) = interpreter();
    r.enter("LOAD \"NOPE\"");
    assert_eq!(con.take_output(), "?FILE NOT FOUND\n");
}

#[test]
fn test_del_removes_a_range() {
    let (mut r, con) = interpreter();
    r.enter("10 PRINT 1");
    r.enter("20 PRINT 2");
    r.enter("30 PRINT 3");
    r.enter("40 PRINT 4");
    r.enter("DEL 20,30");
    r.enter("LIST");
    assert_eq!(con.take_output(), "10 PRINT 1\n40 PRINT 4\n");
}
