/*!
# `PRINT [<list of expressions>]`
`?` is an abbreviation for `PRINT`.

## Purpose
Output text to the terminal.

## Remarks
A `PRINT` by itself outputs a newline. A semicolon (;) between items
puts them side by side; a comma advances to the next 16-column zone.
Ending the list with either separator holds the cursor on the line.
A number prints with a space standing in for the sign of a
non-negative value, and a space after.

## Example
```text
PRINT "X=";12,"Y=";-3
X= 12           Y=-3
```

*/
