/*!
# `POKE <address>,<value>`

## Purpose
Writes a value to the host.

## Remarks
Both arguments are expressions.

## Example
```text
10 FOR I=0 TO 7
20 POKE 4096+I,I*I
30 NEXT I
```

*/
