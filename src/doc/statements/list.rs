/*!
# `LIST [<from>[,<to>]]`

## Purpose
Show the stored program.

## Remarks
Lines print in ascending order, exactly as last stored. A single
number lists that one line; two numbers list the inclusive range.

## Example
```text
]LIST 10,20
10 PRINT "HELLO"
20 GOTO 10
```

*/
