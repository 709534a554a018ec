/*!
# `CONT`

## Purpose
Continue a program halted by STOP or END.

## Remarks
Execution resumes at the line after the halt. Variables keep the values
they had, which makes STOP/CONT a serviceable debugger. Editing the
program discards the resume point and CONT reports
`?CAN'T CONTINUE ERROR`.

## Example
```text
10 A=1
20 STOP
30 PRINT A
RUN
BREAK IN 20
CONT
 1
```

*/
