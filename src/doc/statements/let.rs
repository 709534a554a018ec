/*!
# `[LET] <variable> = <expression>`

## Purpose
Assign a value.

## Remarks
The word LET is optional and almost nobody types it. The sides must
agree with the name's sigil: a `$` name takes a string, anything else
a number, or it is a `?TYPE MISMATCH ERROR`. Assigning an array
element with no DIM in force declares the array first.

## Example
```text
10 LET A=1
20 B$="TWO"
```

*/
