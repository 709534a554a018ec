/*!
# Chapter 2: Expressions

## Operators

From loosest to tightest binding:

```text
OR
AND
NOT
=  <>  <  <=  >  >=
+  -
*  /
unary -  unary +
^
```

`^` associates to the right: `2^3^2` is `2^(3^2)` = 512. Unary minus
binds looser than `^`, so `-2^2` is -4.

Comparisons produce 1 for true and 0 for false. Two strings compare in
ordinal order; two numbers compare numerically; comparing a string with
a number is a `?TYPE MISMATCH ERROR`. The logical operators treat any
nonzero number as true and also produce exactly 1 or 0.

`+` adds numbers and joins strings. When one side is a string, the
numeric side joins in the form PRINT would give it.

## PRINT

`PRINT` takes a list of expressions. A `;` between items puts them side
by side; a `,` advances to the next 16-column zone. Ending the list
with either separator holds the cursor on the line; otherwise PRINT
ends the line. Numbers print with a leading space standing in for the
missing sign of a non-negative value and a trailing space:

```text
]PRINT 1+2*3
 7
]PRINT "TOTAL:";12;-3
TOTAL: 12 -3
```

## Functions

Numeric: `ABS`, `ATN`, `COS`, `EXP`, `INT` (rounds toward minus
infinity), `LOG`, `RND`, `SGN`, `SIN`, `SQR`, `TAN`, `PEEK`, `POS`.
`RND(x)` returns the next value in 0 up to (but not including) 1; a
negative `x` reseeds the generator first.

String: `LEN`, `VAL`, `STR$`, `CHR$`, `ASC`, `LEFT$`, `RIGHT$`,
`MID$(s,start[,len])` with a 1-based start, and `TAB`/`SPC` for
positioning inside a PRINT list.

## DEF FN

`DEF FN SQ(X) = X*X` defines a one-parameter function for use as
`FN SQ(7)`. The parameter is an ordinary variable: while the body
evaluates it holds the argument, and its old value comes back
afterward. Running the defining line again redefines the function, so a
program redefines its functions on every RUN.
*/
