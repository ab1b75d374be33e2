/*!
# `USER [<expression>|<string>|,|;]...`

## Purpose
Like `PRINT`, but for a second host channel.

## Remarks
Hosts use `USER` for output that is not text, such as driving a
display or a device. Both comma and semicolon are passed to the host
as separators.

## Example
```text
10 USER "LED",1;255
```

*/
