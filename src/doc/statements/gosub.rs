/*!
# `GOSUB <line number>`

## Purpose
Remember the line after this one and move execution to the specified line number.

## Remarks
`RETURN` will resume execution at the remembered line.
Up to ten calls may be pending. A deeper `GOSUB` does not jump;
it is reported to the host as a diagnostic and execution continues
with the next line.

## Example
```text
10 GOSUB 100
20 PRINT "WORLD"
90 END
100 PRINT "HELLO"
110 RETURN
HELLO
WORLD
```

*/
