/*!
# `CLEAR`

## Purpose
Reset all variables without touching the program.

## Remarks
Variables, arrays, active loops, pending RETURNs, and the DATA pointer
are cleared. The program and any DEF FN definitions survive.

## Example
```text
A=5 : CLEAR : PRINT A
 0
```

*/
