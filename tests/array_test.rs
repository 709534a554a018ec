mod common;
use common::*;

#[test]
fn test_dim_and_assign() {
    let (mut r, con) = interpreter();
    r.enter("10 DIM A(3)");
    r.enter("20 A(0)=5 : A(3)=7");
    r.enter("30 PRINT A(0);A(1);A(3)");
    r.enter("RUN");
    assert_eq!(con.take_output(), " 5  0  7 \n");
}

#[test]
fn test_out_of_bounds() {
    let (mut r, con) = interpreter();
    r.enter("10 DIM A(3)");
    r.enter("20 A(4)=1");
    r.enter("RUN");
    assert_eq!(con.take_output(), "?BAD SUBSCRIPT ERROR IN 20\n");
}

#[test]
fn test_auto_dimension_gives_ten_per_axis() {
    let (mut r, con) = interpreter();
    r.enter("A(10)=1 : PRINT A(10)");
    assert_eq!(con.take_output(), " 1 \n");
    r.enter("A(11)=1");
    assert_eq!(con.take_output(), "?BAD SUBSCRIPT ERROR\n");
}

#[test]
fn test_auto_dimension_fixes_the_rank() {
    let (mut r, con) = interpreter();
    r.enter("10 X=B(1)");
    r.enter("20 X=B(1,2)");
    r.enter("RUN");
    assert_eq!(con.take_output(), "?BAD SUBSCRIPT ERROR IN 20\n");
}

#[test]
fn test_two_dimensions() {
    let (mut r, con) = interpreter();
    r.enter("10 DIM G(2,2)");
    r.enter("20 FOR I=0 TO 2 : FOR J=0 TO 2 : G(I,J)=I*3+J : NEXT J,I");
    r.enter("30 PRINT G(0,0);G(1,2);G(2,1)");
    r.enter("RUN");
    assert_eq!(con.take_output(), " 0  5  7 \n");
}

#[test]
fn test_string_arrays() {
    let (mut r, con) = interpreter();
    r.enter("10 DIM W$(2)");
    r.enter("20 W$(1)=\"HI\"");
    r.enter("30 PRINT W$(0);\"/\";W$(1)");
    r.enter("RUN");
    assert_eq!(con.take_output(), "/HI\n");
}

#[test]
fn test_array_and_scalar_share_a_name() {
    let (mut r, con) = interpreter();
    r.enter("A=1 : A(0)=2 : PRINT A;A(0)");
    assert_eq!(con.take_output(), " 1  2 \n");
}

#[test]
fn test_negative_subscript() {
    let (mut r, con) = interpreter();
    r.enter("PRINT A(-1)");
    assert_eq!(con.take_output(), "?BAD SUBSCRIPT ERROR\n");
}

#[test]
fn test_type_mismatch_across_sigil() {
    let (mut r, con) = interpreter();
    r.enter("10 A$(0)=5");
    r.enter("RUN");
    assert_eq!(con.take_output(), "?TYPE MISMATCH ERROR IN 10\n");
}

#[test]
fn test_dim_several_arrays_in_one_statement() {
    let (mut r, con) = interpreter();
    r.enter("10 DIM A(2), B$(2)");
    r.enter("20 A(2)=9 : B$(2)=\"Z\"");
    r.enter("30 PRINT A(2);B$(2)");
    r.enter("RUN");
    assert_eq!(con.take_output(), " 9 Z\n");
}
