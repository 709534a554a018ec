/*!
# `NEW`

## Purpose
Erase everything and start fresh.

## Remarks
The program, variables, arrays, loops, DATA pool, and DEF FN
definitions all go. Memory altered with POKE is left alone.

## Example
```text
NEW
```

*/
