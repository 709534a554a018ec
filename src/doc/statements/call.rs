/*!
# `CALL <expression>`

## Purpose
Run a machine language routine at an address.

## Remarks
There is no 6502 behind this curtain. The address expression is
evaluated, checked for being a number, and discarded.

## Example
```text
CALL 768
```

*/
