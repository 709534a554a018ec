/*!
# `REM <anything>`

## Purpose
Hold a remark for the human reading the listing.

## Remarks
Everything to the end of the line belongs to the REM, colons
included, so it must be the last statement on its line.

## Example
```text
10 REM COMPUTE THE TOTALS
```

*/
