/*!
# `READ <list of variables>`

## Purpose
Take the next items from the DATA pool.

## Remarks
READs consume the pool in line-number order no matter which path the
program takes. Running out is a `?OUT OF DATA ERROR`; text that is
not a number read into a numeric variable is a
`?TYPE MISMATCH ERROR`. RESTORE rewinds the pool.

## Example
```text
10 DATA 1,"HI",3
20 READ A,B$,C
30 PRINT A;" ";B$;" ";C
RUN
 1  HI  3
```

*/
