/*!
# `HOME`

## Purpose
Clear the screen and put the cursor in the top-left corner.

## Remarks
Purely cosmetic; no program state changes.

## Example
```text
HOME
```

*/
