/*!
# Functions
*/

pub mod ABS {
    /*!
    ## ABS(X)
    Returns X without its sign.
    ```text
    PRINT ABS(-66)
     66
    ```
    */
}

pub mod ASC {
    /*!
    ## ASC(X$)
    Returns the character code of the first character of X$.
    An empty string is an `?ILLEGAL QUANTITY ERROR`.
    ```text
    PRINT ASC("A")
     65
    ```
    */
}

pub mod ATN {
    /*!
    ## ATN(X)
    Returns the arctangent of X, in radians.
    ```text
    PRINT ATN(1)
     0.785398163
    ```
    */
}

pub mod CHR {
    /*!
    ## CHR$(X)
    Returns the one-character string with character code X.
    ```text
    PRINT CHR$(65)
    A
    ```
    */
}

pub mod COS {
    /*!
    ## COS(X)
    Returns the cosine of X in radians.
    ```text
    PRINT COS(0)
     1
    ```
    */
}

pub mod EXP {
    /*!
    ## EXP(X)
    Returns e raised to the power X.
    ```text
    PRINT EXP(1)
     2.71828183
    ```
    */
}

pub mod INT {
    /*!
    ## INT(X)
    Returns the largest whole number not greater than X. Note the
    behavior on negatives.
    ```text
    PRINT INT(2.7);INT(-2.7)
     2 -3
    ```
    */
}

pub mod LEFT {
    /*!
    ## LEFT$(X$,N)
    Returns the first N characters of X$.
    ```text
    PRINT LEFT$("APPLESOFT",5)
    APPLE
    ```
    */
}

pub mod LEN {
    /*!
    ## LEN(X$)
    Returns the number of characters in X$.
    ```text
    PRINT LEN("APPLE")
     5
    ```
    */
}

pub mod LOG {
    /*!
    ## LOG(X)
    Returns the natural logarithm of X. Zero or a negative is an
    `?ILLEGAL QUANTITY ERROR`.
    ```text
    PRINT LOG(1)
     0
    ```
    */
}

pub mod MID {
    /*!
    ## MID$(X$,S[,N])
    Returns N characters of X$ starting at position S, counting from
    1. Without N, the rest of the string.
    ```text
    PRINT MID$("APPLESOFT",6,3)
    SOF
    ```
    */
}

pub mod PEEK {
    /*!
    ## PEEK(X)
    Returns the byte at memory address X, 0 to 65535.
    ```text
    POKE 768,123 : PRINT PEEK(768)
     123
    ```
    */
}

pub mod POS {
    /*!
    ## POS(X)
    Returns the cursor column, counting from 0. The argument is
    evaluated and ignored.
    ```text
    PRINT "AB";POS(0)
    AB 2
    ```
    */
}

pub mod RIGHT {
    /*!
    ## RIGHT$(X$,N)
    Returns the last N characters of X$.
    ```text
    PRINT RIGHT$("APPLESOFT",4)
    SOFT
    ```
    */
}

pub mod RND {
    /*!
    ## RND(X)
    Returns the next random number, at least 0 and below 1. A negative
    X reseeds the generator first, giving a repeatable sequence; any
    other X just draws the next value.
    ```text
    10 IF RND(1)<0.5 THEN PRINT "HEADS" : END
    20 PRINT "TAILS"
    ```
    */
}

pub mod SGN {
    /*!
    ## SGN(X)
    Returns -1, 0, or 1 as X is negative, zero, or positive.
    ```text
    PRINT SGN(-5);SGN(0);SGN(5)
    -1  0  1
    ```
    */
}

pub mod SIN {
    /*!
    ## SIN(X)
    Returns the sine of X in radians.
    ```text
    PRINT SIN(0)
     0
    ```
    */
}

pub mod SPC {
    /*!
    ## SPC(N)
    Returns N spaces. Useful only inside a PRINT list.
    ```text
    PRINT "A";SPC(3);"B"
    A   B
    ```
    */
}

pub mod SQR {
    /*!
    ## SQR(X)
    Returns the square root of X. A negative X is an
    `?ILLEGAL QUANTITY ERROR`.
    ```text
    PRINT SQR(9)
     3
    ```
    */
}

pub mod STR {
    /*!
    ## STR$(X)
    Returns X as a string, formatted the way PRINT would but without
    the leading sign column.
    ```text
    PRINT STR$(-1.5)
    -1.5
    ```
    */
}

pub mod TAB {
    /*!
    ## TAB(N)
    Returns enough spaces to carry the cursor to column N, counting
    from 1, or nothing when the cursor is already there or past.
    Useful only inside a PRINT list.
    ```text
    PRINT "AB";TAB(10);"X"
    AB       X
    ```
    */
}

pub mod TAN {
    /*!
    ## TAN(X)
    Returns the tangent of X in radians.
    ```text
    PRINT TAN(0)
     0
    ```
    */
}

pub mod VAL {
    /*!
    ## VAL(X$)
    Returns the number at the start of X$, or 0 when there is none.
    ```text
    PRINT VAL("12AB")
     12
    ```
    */
}
