/*!
# `INPUT ["<prompt>";|,] <list of variables>`

## Purpose
Read values from the keyboard.

## Remarks
A string literal before the variables prints as the prompt: follow it
with `;` to append `? `, or with `,` to print it bare. Without one the
prompt is `? `. The typed line splits on commas and assigns item by
item; too few items and the remainder is asked for again with `?? `.
Text that is not a number reads into a numeric variable as 0.

## Example
```text
10 INPUT "HOW MANY";N
RUN
HOW MANY? 3
```

*/
