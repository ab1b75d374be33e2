/*!
# `NEXT <variable>`
Also see `FOR`

## Purpose
Used to indicate the end of a `FOR` loop.

## Remarks
The variable must name the innermost active loop. A `NEXT` naming any
other variable does nothing but report a diagnostic to the host; the
active loop is left as it was.

## Example
```text
10 FOR J=1 TO 2
20 FOR I=1 TO 2
30 PRINT J,I
40 NEXT I
50 NEXT J
```

*/
