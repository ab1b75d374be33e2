/*!
# `PRINT [<expression>|<string>|,|;]...`

## Purpose
Hands values and strings to the host for display.

## Remarks
A comma is passed to the host as a separator; a semicolon separates
without telling the host anything. How numbers are formatted and where
the output goes is decided by the host.

## Example
```text
10 PRINT "A IS ";1+2
A IS 3
```

*/
