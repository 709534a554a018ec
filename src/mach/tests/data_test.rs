use super::*;

#[test]
fn test_read_follows_line_order_not_flow_order() {
    let (mut r, con) = interpreter();
    r.enter("10 GOTO 40");
    r.enter("20 DATA 1,2");
    r.enter("30 DATA 3");
    r.enter("40 READ A,B,C");
    r.enter("50 PRINT A;B;C");
    r.enter("RUN");
    assert_eq!(con.take_output(), " 1  2  3 \n");
}

#[test]
fn test_quoted_item_keeps_comma_and_colon_ends_segment() {
    let (mut r, con) = interpreter();
    r.enter("10 DATA \"A,B\", C : PRINT \"NEVER\"");
    r.enter("20 READ A$,B$");
    r.enter("30 PRINT A$;\"/\";B$");
    r.enter("RUN");
    assert_eq!(con.take_output(), "A,B/C\n");
}

#[test]
fn test_restore_rewinds_the_pool() {
    let (mut r, con) = interpreter();
    r.enter("10 DATA 7");
    r.enter("20 READ A");
    r.enter("30 RESTORE");
    r.enter("40 READ B");
    r.enter("50 PRINT A;B");
    r.enter("RUN");
    assert_eq!(con.take_output(), " 7  7 \n");
}

#[test]
fn test_out_of_data() {
    let (mut r, con) = interpreter();
    r.enter("10 DATA 1");
    r.enter("20 READ A,B");
    r.enter("RUN");
    assert_eq!(con.take_output(), "?OUT OF DATA ERROR IN 20\n");
}

#[test]
fn test_read_text_into_numeric_is_a_mismatch() {
    let (mut r, con) = interpreter();
    r.enter("10 DATA HELLO");
    r.enter("20 READ A");
    r.enter("RUN");
    assert_eq!(con.take_output(), "?TYPE MISMATCH ERROR IN 20\n");
}

#[test]
fn test_pool_rebuilds_each_run() {
    let (mut r, con) = interpreter();
    r.enter("10 DATA 5");
    r.enter("20 READ A");
    r.enter("30 PRINT A");
    r.enter("RUN");
    r.enter("RUN");
    assert_eq!(con.take_output(), " 5 \n 5 \n");
}
