/*!
# `DATA <list of constants>`

## Purpose
Hold constants for READ.

## Remarks
Items are separated by commas; quote an item to keep commas or leading
spaces inside it. A colon outside quotes ends the list. When RUN
starts, the items of every DATA line join one pool in line-number
order, whether or not execution ever reaches the lines. At execution
time a DATA statement does nothing.

## Example
```text
10 DATA 1,"HI, THERE",3
20 READ A,B$,C
```

*/
