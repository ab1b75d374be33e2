/*!
# `PEEK <address>,<variable>`

## Purpose
Reads a value from the host.

## Remarks
The address is any expression. The host decides what it refers to.
If the host answers, the answer is stored in the variable.

## Example
```text
10 PEEK 4096,A
```

*/
