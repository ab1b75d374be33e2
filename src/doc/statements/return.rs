/*!
# `RETURN`

## Purpose
`RETURN` is used at the end of a subroutine.

## Remarks
See `GOSUB`. A `RETURN` with no pending `GOSUB` does nothing
but report a diagnostic to the host.

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
