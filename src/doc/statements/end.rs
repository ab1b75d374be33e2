/*!
# `END`

## Purpose
Immediately and unconditionally stop running the program.

## Remarks
Variables are left intact for inspection by the host.
`END` at the end of a program is optional; running off the last line
finishes the program as well.

## Example
```text
10 PRINT "HELLO"
20 END
30 PRINT "THIS DOES NOT PRINT"
HELLO
```

*/
