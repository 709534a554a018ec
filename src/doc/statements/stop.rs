/*!
# `STOP`

## Purpose
Halt the program and say where.

## Remarks
Prints `BREAK IN <line>`. All state is kept, so variables can be
inspected at the prompt and CONT picks up at the following line.

## Example
```text
10 STOP
RUN
BREAK IN 10
```

*/
