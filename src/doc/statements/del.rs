/*!
# `DEL <from>[,<to>]`

## Purpose
Delete a line or a range of lines from the program.

## Remarks
Both ends are inclusive. A single number deletes that one line, which
is also what entering a bare line number at the prompt does.

## Example
```text
DEL 20,30
```

*/
